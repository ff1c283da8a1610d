//! Receipt renderer
//!
//! Pure presentation: formats an invoice into a fixed-width receipt
//! string. No pricing policy lives here and no I/O happens here; the
//! caller decides what to do with the string.

use crate::invoice::Invoice;
use crate::utils::text::ReceiptTextBuilder;
use shared::money::format_gbp;

const DEFAULT_WIDTH: usize = 38;

pub struct ReceiptRenderer<'a> {
    invoice: &'a Invoice,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(invoice: &'a Invoice) -> Self {
        Self {
            invoice,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let mut b = ReceiptTextBuilder::new(self.width);

        // ── Items ──
        b.line_lr("ITEM", "PRICE");
        b.eq_sep();
        for item in self.invoice.basket_items() {
            let price = format_gbp(item.line_price());
            let desc = item.description();
            let mut lines: Vec<&str> = desc.lines().collect();
            let last = lines.pop().unwrap_or("");

            // Weighed goods: name first, price on the detail line
            for line in &lines {
                b.write_line(line);
            }
            if lines.is_empty() {
                b.line_lr(last, &price);
            } else {
                b.line_lr(&format!("  {}", last), &price);
            }
        }

        b.dash_sep();
        b.line_lr("Sub-total", &format_gbp(self.invoice.subtotal()));

        // ── Savings ──
        let discount_total = self.invoice.discount_total();
        if discount_total != 0.0 {
            b.dash_sep();
            b.write_line("SAVINGS");
            b.dash_sep();
            for discount in self.invoice.discounts() {
                b.line_lr(&discount.name, &format_gbp(discount.line_price()));
            }
            b.dash_sep();
            b.line_lr("Total savings", &format_gbp(discount_total));
        }

        b.eq_sep();
        b.line_lr("Total to pay", &format_gbp(self.invoice.total()));

        b.build()
    }
}
