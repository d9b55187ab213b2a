use serde::{Deserialize, Serialize};

use super::datetime::DateTimeValue;
use super::person::Person;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_number: Option<String>,
    pub seat_row: Option<String>,
    pub seat_section: Option<String>,
    pub seating_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub name: Option<String>,
    pub ticket_number: Option<String>,
    #[serde(default)]
    pub ticketed_seat: Seat,
    /// Barcode content, prefixed with its format (`qrcode:`, `aztecbin:` ...) or a URL.
    pub ticket_token: Option<String>,
    pub under_name: Option<Person>,
    pub valid_from: Option<DateTimeValue>,
    pub valid_until: Option<DateTimeValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Unknown,
    QrCode,
    AztecCode,
    Code128,
    DataMatrix,
    Pdf417,
    Code39,
    Ean13,
    Url,
}

const TOKEN_PREFIXES: [(&str, TokenType); 10] = [
    ("qrcode:", TokenType::QrCode),
    ("azteccode:", TokenType::AztecCode),
    ("aztecbin:", TokenType::AztecCode),
    ("barcode128:", TokenType::Code128),
    ("datamatrix:", TokenType::DataMatrix),
    ("pdf417:", TokenType::Pdf417),
    ("pdf417bin:", TokenType::Pdf417),
    ("code39:", TokenType::Code39),
    ("ean13:", TokenType::Ean13),
    ("http", TokenType::Url),
];

impl TokenType {
    pub fn from_token(token: &str) -> Self {
        let lower = token.to_ascii_lowercase();
        if lower.starts_with("aztec") {
            return TokenType::AztecCode;
        }
        if lower.starts_with("pdf417") {
            return TokenType::Pdf417;
        }
        TOKEN_PREFIXES
            .iter()
            .find(|(prefix, _)| lower.starts_with(prefix))
            .map_or(TokenType::Unknown, |(_, kind)| *kind)
    }

    pub fn is_barcode(&self) -> bool {
        !matches!(self, TokenType::Unknown | TokenType::Url)
    }
}

impl Ticket {
    pub fn token_type(&self) -> TokenType {
        self.ticket_token
            .as_deref()
            .map_or(TokenType::Unknown, TokenType::from_token)
    }

    /// Token payload without the format prefix. URLs are returned whole.
    pub fn ticket_token_data(&self) -> Option<&str> {
        let token = self.ticket_token.as_deref().filter(|t| !t.is_empty())?;
        if TokenType::from_token(token) == TokenType::Url {
            return Some(token);
        }
        let lower = token.to_ascii_lowercase();
        Some(
            TOKEN_PREFIXES
                .iter()
                .filter(|(prefix, kind)| *kind != TokenType::Url && lower.starts_with(prefix))
                .map(|(prefix, _)| prefix.len())
                .max()
                .map_or(token, |len| &token[len..]),
        )
    }

    pub fn seat_number(&self) -> &str {
        self.ticketed_seat.seat_number.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMembership {
    pub program_name: Option<String>,
    pub membership_number: Option<String>,
    pub token: Option<String>,
    pub member: Option<Person>,
    pub valid_from: Option<DateTimeValue>,
    pub valid_until: Option<DateTimeValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ticket(token: &str) -> Ticket {
        Ticket {
            ticket_token: Some(token.to_string()),
            ..Ticket::default()
        }
    }

    #[test]
    fn test_token_classification() {
        assert_eq!(create_test_ticket("qrcode:ABC").token_type(), TokenType::QrCode);
        assert_eq!(create_test_ticket("aztecbin:AAEC").token_type(), TokenType::AztecCode);
        assert_eq!(create_test_ticket("pdf417bin:xx").token_type(), TokenType::Pdf417);
        assert_eq!(create_test_ticket("ean13:4006381333931").token_type(), TokenType::Ean13);
        assert_eq!(create_test_ticket("https://example.com/t").token_type(), TokenType::Url);
        assert_eq!(create_test_ticket("M1DOE/JOHN").token_type(), TokenType::Unknown);
        assert_eq!(Ticket::default().token_type(), TokenType::Unknown);
    }

    #[test]
    fn test_token_data_strips_prefix() {
        assert_eq!(create_test_ticket("qrcode:ABC").ticket_token_data(), Some("ABC"));
        assert_eq!(create_test_ticket("pdf417bin:xyz").ticket_token_data(), Some("xyz"));
        assert_eq!(create_test_ticket("azteccode:123").ticket_token_data(), Some("123"));
        assert_eq!(
            create_test_ticket("https://example.com/t").ticket_token_data(),
            Some("https://example.com/t")
        );
        assert_eq!(create_test_ticket("").ticket_token_data(), None);
    }
}
