//! Output formatting for extracted cars (JSON, delimited text).

use crate::cars::Car;
use crate::error::Result;

/// Header line of the delimited file.
///
/// Rows below it are tab-separated even though the header uses commas.
pub const DELIMITED_HEADER: &str = "Description,Price,Link";

/// Output format for records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array, two-space indent.
    Json,
    /// Comma header followed by tab-separated rows.
    Delimited,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Delimited => write!(f, "delimited"),
        }
    }
}

/// Formats cars for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats all cars in the configured format.
    pub fn format_cars(&self, cars: &[Car]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Self::json(cars),
            OutputFormat::Delimited => Ok(Self::delimited(cars)),
        }
    }

    // JSON formatting

    /// Pretty JSON array with `Description`, `Price`, `Link` keys; `[]` when empty.
    pub fn json(cars: &[Car]) -> Result<String> {
        Ok(serde_json::to_string_pretty(cars)?)
    }

    // Delimited formatting

    /// Header line plus one tab-joined line per car, each newline-terminated.
    pub fn delimited(cars: &[Car]) -> String {
        let mut out = String::with_capacity(DELIMITED_HEADER.len() + 1 + cars.len() * 64);
        out.push_str(DELIMITED_HEADER);
        out.push('\n');

        for car in cars {
            out.push_str(&format!("{}\t{}\t{}\n", car.description, car.price, car.link));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cars() -> Vec<Car> {
        vec![
            Car::new("2024 Lexus IS 350 F SPORT", "$45,000", "/vehicledetail/abc/"),
            Car::new("2024 Lexus IS 350", "", "https://www.cars.com/vehicledetail/def/"),
        ]
    }

    // JSON format tests

    #[test]
    fn test_json_pretty_two_space_indent() {
        let output = Formatter::json(&[Car::new("2024 IS 350", "$45,000", "/x")]).unwrap();
        let expected = "[\n  {\n    \"Description\": \"2024 IS 350\",\n    \"Price\": \"$45,000\",\n    \"Link\": \"/x\"\n  }\n]";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(Formatter::json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_json_parses_back_in_order() {
        let cars = make_cars();
        let output = Formatter::json(&cars).unwrap();
        let parsed: Vec<Car> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, cars);
    }

    // Delimited format tests

    #[test]
    fn test_delimited_rows_are_tab_separated() {
        let output = Formatter::delimited(&make_cars());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Description,Price,Link");
        assert_eq!(lines[1], "2024 Lexus IS 350 F SPORT\t$45,000\t/vehicledetail/abc/");
        assert_eq!(lines[2], "2024 Lexus IS 350\t\thttps://www.cars.com/vehicledetail/def/");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_delimited_fields_are_not_quoted() {
        let output = Formatter::delimited(&[Car::new("A, \"B\"", "$1,000", "/a")]);
        assert_eq!(output, "Description,Price,Link\nA, \"B\"\t$1,000\t/a\n");
    }

    #[test]
    fn test_delimited_empty_is_header_only() {
        assert_eq!(Formatter::delimited(&[]), "Description,Price,Link\n");
    }

    #[test]
    fn test_format_cars_dispatch() {
        let cars = make_cars();
        let json = Formatter::new(OutputFormat::Json).format_cars(&cars).unwrap();
        let delimited = Formatter::new(OutputFormat::Delimited).format_cars(&cars).unwrap();

        assert!(json.starts_with('['));
        assert!(delimited.starts_with(DELIMITED_HEADER));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Delimited.to_string(), "delimited");
    }
}
