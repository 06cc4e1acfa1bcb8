use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::services::renderer::{ReceiptRenderer, RendererBackend},
    domain::models::{ReceiptFields, RenderedReceipt},
};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 392;

/// In-process backend producing the receipt as an SVG document. Field text
/// goes into the markup verbatim; callers are trusted with the content.
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Arc<dyn ReceiptRenderer> {
        Arc::new(Self) as Arc<dyn ReceiptRenderer>
    }
}

#[async_trait]
impl ReceiptRenderer for SvgRenderer {
    fn backend(&self) -> RendererBackend {
        RendererBackend::Svg
    }

    async fn render(&self, fields: &ReceiptFields) -> anyhow::Result<RenderedReceipt> {
        Ok(RenderedReceipt {
            bytes: render_document(fields).into_bytes(),
            media_type: "image/svg+xml".to_string(),
        })
    }
}

fn render_document(fields: &ReceiptFields) -> String {
    let detail_rows = [
        ("PAYMENT TYPE", fields.payment_type.as_str()),
        ("TRANSACTION ID", fields.transaction_id.as_str()),
        ("TO ACCOUNT", fields.to_account.as_str()),
        ("IFSC", fields.ifsc.as_str()),
        ("COUNTER PARTY NAME", fields.recipient_name.as_str()),
    ];

    let mut rows = String::new();
    for (index, (label, value)) in detail_rows.iter().enumerate() {
        let y = 158 + index as u32 * 40;
        let _ = write!(
            rows,
            r##"  <text x="47" y="{y}" class="label">{label}</text>
  <text x="261" y="{y}" class="value">{value}</text>
  <line x1="31" y1="{divider}" x2="968" y2="{divider}" stroke="#f5f5f5"/>
"##,
            divider = y + 14,
        );
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">
  <style>
    text {{ font-family: -apple-system, 'Segoe UI', 'Roboto', sans-serif; }}
    .name {{ font-size: 20px; font-weight: 600; fill: #000; }}
    .transaction {{ font-size: 12px; fill: #6b7280; }}
    .payment-type {{ font-size: 12px; font-weight: 600; fill: #dc2626; letter-spacing: 0.5px; }}
    .amount {{ font-size: 26px; font-weight: 700; fill: #000; }}
    .date {{ font-size: 16px; font-weight: 600; fill: #000; }}
    .label {{ font-size: 12px; font-weight: 500; fill: #9ca3af; letter-spacing: 0.8px; }}
    .value {{ font-size: 14px; font-weight: 600; fill: #000; }}
  </style>
  <rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" rx="8" fill="#fff" stroke="#e8e8e8"/>
  <line x1="0" y1="88" x2="{WIDTH}" y2="88" stroke="#f0f0f0"/>
  <text x="83" y="42" class="name">{recipient}</text>
  <text x="83" y="62" class="transaction">UTR : {utr}</text>
  <text x="968" y="36" text-anchor="end" class="payment-type">{payment_type_upper}</text>
  <text x="968" y="68" text-anchor="end" class="amount">{amount}</text>
  <text x="31" y="112" class="date">{date}</text>
{rows}</svg>
"##,
        recipient = fields.recipient_name,
        utr = fields.utr,
        payment_type_upper = fields.payment_type.to_uppercase(),
        amount = fields.amount,
        date = fields.date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ReceiptFields {
        ReceiptFields {
            recipient_name: "Jordan Vale".to_string(),
            utr: "429817530021".to_string(),
            payment_type: "imps".to_string(),
            amount: "500.00".to_string(),
            date: "08 Aug 2026".to_string(),
            transaction_id: "TXN-9".to_string(),
            to_account: "XXXX4821".to_string(),
            ifsc: "HDFC0001234".to_string(),
        }
    }

    #[tokio::test]
    async fn renders_all_field_values_verbatim() {
        let renderer = SvgRenderer::new();
        let rendered = renderer.render(&sample_fields()).await.unwrap();

        assert_eq!(rendered.media_type, "image/svg+xml");
        let document = String::from_utf8(rendered.bytes).unwrap();
        for value in [
            "Jordan Vale",
            "429817530021",
            "IMPS",
            "500.00",
            "08 Aug 2026",
            "TXN-9",
            "XXXX4821",
            "HDFC0001234",
        ] {
            assert!(document.contains(value), "missing {value}");
        }
    }

    #[tokio::test]
    async fn empty_fields_still_produce_a_document() {
        let renderer = SvgRenderer::new();
        let rendered = renderer.render(&ReceiptFields::default()).await.unwrap();

        assert!(!rendered.bytes.is_empty());
        let document = String::from_utf8(rendered.bytes).unwrap();
        assert!(document.starts_with("<svg"));
        assert!(document.contains("PAYMENT TYPE"));
        assert!(document.contains("COUNTER PARTY NAME"));
    }
}
