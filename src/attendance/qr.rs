use base64::{Engine, engine::general_purpose::STANDARD};
use qrcode::QrCode;
use qrcode::render::svg;

use crate::consts::QR_MIN_DIMENSION;
use crate::error::{Error, Result};

const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Turns a check-in URL into an image payload a client can display.
pub trait QrEncoder: Send + Sync {
    fn encode(&self, url: &str) -> Result<String>;
}

/// Renders QR codes as SVG and returns them as `data:` URLs.
#[derive(Debug, Clone, Copy)]
pub struct SvgQrEncoder {
    pub min_dimension: u32,
}

impl Default for SvgQrEncoder {
    fn default() -> Self {
        Self {
            min_dimension: QR_MIN_DIMENSION,
        }
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, url: &str) -> Result<String> {
        let code = QrCode::new(url.as_bytes()).map_err(|e| Error::Qr(e.to_string()))?;
        let image = code
            .render::<svg::Color<'_>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();
        Ok(format!("{SVG_DATA_URL_PREFIX}{}", STANDARD.encode(image)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_svg_data_url() {
        let payload = SvgQrEncoder::default()
            .encode("https://club.example/events/1234")
            .unwrap();
        assert!(payload.starts_with(SVG_DATA_URL_PREFIX));

        let svg = STANDARD
            .decode(&payload[SVG_DATA_URL_PREFIX.len()..])
            .unwrap();
        let svg = String::from_utf8(svg).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn same_url_renders_identically() {
        let encoder = SvgQrEncoder::default();
        let a = encoder.encode("https://club.example/events/a").unwrap();
        let b = encoder.encode("https://club.example/events/a").unwrap();
        let c = encoder.encode("https://club.example/events/b").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn oversized_input_is_an_error() {
        let url = "x".repeat(8_000);
        let err = SvgQrEncoder::default().encode(&url).unwrap_err();
        assert!(matches!(err, Error::Qr(_)));
    }
}
