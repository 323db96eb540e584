//! Receipt extraction: OCR text parsing, the recognition seam, and the
//! demo fallback generator.

mod extractor;
mod fallback;
mod items;
pub mod patterns;

pub use extractor::ReceiptTextParser;
pub use fallback::{FallbackGenerator, FALLBACK_CONFIDENCE};
pub use items::default_item_categories;

use crate::error::RecognitionError;
use crate::models::receipt::ReceiptData;

/// Result type for recognition operations.
pub type Result<T> = std::result::Result<T, RecognitionError>;

/// Trait for image-to-text recognition engines.
///
/// The core never performs OCR itself; implementations wrap an external
/// engine (cloud vision API, on-device model) and may be called from async
/// contexts by the host before handing text to [`ReceiptTextParser`].
pub trait TextRecognizer {
    /// Recognize text in an image.
    fn recognize(&self, image: &[u8]) -> Result<String>;
}

/// A receipt scanner composing an optional recognition engine with the
/// rule-based text parser.
///
/// `scan` fails when recognition is unavailable so the caller can choose a
/// fallback path explicitly instead of receiving fabricated data from the
/// primary path.
pub struct ReceiptScanner {
    recognizer: Option<Box<dyn TextRecognizer>>,
    parser: ReceiptTextParser,
}

impl ReceiptScanner {
    /// Scanner with no recognition engine; `scan` always fails with
    /// [`RecognitionError::NotConfigured`].
    pub fn new(parser: ReceiptTextParser) -> Self {
        Self {
            recognizer: None,
            parser,
        }
    }

    /// Install a recognition engine.
    pub fn with_recognizer(mut self, recognizer: Box<dyn TextRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Recognize and parse a receipt image.
    pub fn scan(&self, image: &[u8]) -> Result<ReceiptData> {
        let recognizer = self
            .recognizer
            .as_ref()
            .ok_or(RecognitionError::NotConfigured)?;

        let text = recognizer.recognize(image)?;
        if text.trim().is_empty() {
            return Err(RecognitionError::NoTextDetected);
        }

        Ok(self.parser.parse(&text))
    }

    /// Parse already-recognized text directly. Never fails.
    pub fn scan_text(&self, text: &str) -> ReceiptData {
        self.parser.parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRecognizer(String);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(&self, _image: &[u8]) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_scan_without_recognizer_fails() {
        let scanner = ReceiptScanner::new(ReceiptTextParser::new());
        let err = scanner.scan(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, RecognitionError::NotConfigured));
    }

    #[test]
    fn test_scan_with_empty_recognition_fails() {
        let scanner = ReceiptScanner::new(ReceiptTextParser::new())
            .with_recognizer(Box::new(FixedRecognizer("  \n ".to_string())));

        let err = scanner.scan(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, RecognitionError::NoTextDetected));
    }

    #[test]
    fn test_scan_parses_recognized_text() {
        let scanner = ReceiptScanner::new(ReceiptTextParser::new())
            .with_recognizer(Box::new(FixedRecognizer(
                "INDOMARET\nTotal: Rp 45.000".to_string(),
            )));

        let receipt = scanner.scan(&[0u8; 4]).unwrap();
        assert_eq!(receipt.merchant.as_deref(), Some("Indomaret"));
        assert_eq!(receipt.total, 45_000);
    }
}
