//! Whitespace-token parser for city datasets.

use std::str::SplitWhitespace;

use crate::error::ParseError;
use crate::oracle::Point;

const MIN_CITIES: usize = 3;

/// Parses the dataset text into city coordinates, indexed by city number.
pub(crate) fn parse_cities(text: &str) -> Result<Vec<Point>, ParseError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(ParseError::Empty)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| ParseError::InvalidCityCount(count_token.to_owned()))?;
    if count < MIN_CITIES {
        return Err(ParseError::TooFewCities(count));
    }

    // The declared count is untrusted; let the vector grow past this.
    let mut points = Vec::with_capacity(count.min(1 << 16));
    for record in 0..count {
        let city_number: usize = next_value(&mut tokens, record)?;
        if city_number != record {
            return Err(ParseError::CityNumberMismatch {
                expected: record,
                found: city_number,
            });
        }
        let x: i32 = next_value(&mut tokens, record)?;
        let y: i32 = next_value(&mut tokens, record)?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn next_value<T>(tokens: &mut SplitWhitespace<'_>, record: usize) -> Result<T, ParseError>
where
    T: std::str::FromStr + Default + PartialOrd,
{
    let token = tokens
        .next()
        .ok_or(ParseError::IncompleteRecord { record })?;

    match token.parse::<T>() {
        Ok(value) if value >= T::default() => Ok(value),
        _ => Err(ParseError::InvalidValue {
            record,
            token: token.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let points = parse_cities("3\n0 1 2\n1 3 4\n2 5 6\n").unwrap();
        assert_eq!(
            points,
            vec![Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)]
        );
    }

    #[test]
    fn test_parse_ignores_layout() {
        let points = parse_cities("3 0 1 2 1 3 4\n\n  2 5\t6").unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_cities(""), Err(ParseError::Empty));
        assert_eq!(parse_cities("  \n\t "), Err(ParseError::Empty));
    }

    #[test]
    fn test_invalid_city_count() {
        assert_eq!(
            parse_cities("abc\n0 1 2"),
            Err(ParseError::InvalidCityCount("abc".into()))
        );
        assert_eq!(
            parse_cities("-4"),
            Err(ParseError::InvalidCityCount("-4".into()))
        );
    }

    #[test]
    fn test_too_few_cities() {
        assert_eq!(
            parse_cities("2\n0 0 0\n1 1 1"),
            Err(ParseError::TooFewCities(2))
        );
    }

    #[test]
    fn test_city_number_mismatch() {
        assert_eq!(
            parse_cities("3\n0 0 0\n2 1 1\n1 2 2"),
            Err(ParseError::CityNumberMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_coordinate() {
        assert_eq!(
            parse_cities("3\n0 0 0\n1 x 1\n2 2 2"),
            Err(ParseError::InvalidValue {
                record: 1,
                token: "x".into()
            })
        );
        assert_eq!(
            parse_cities("3\n0 0 0\n1 1 -1\n2 2 2"),
            Err(ParseError::InvalidValue {
                record: 1,
                token: "-1".into()
            })
        );
    }

    #[test]
    fn test_incomplete_record() {
        assert_eq!(
            parse_cities("3\n0 0 0\n1 1 1\n2 2"),
            Err(ParseError::IncompleteRecord { record: 2 })
        );
        assert_eq!(
            parse_cities("3\n0 0 0"),
            Err(ParseError::IncompleteRecord { record: 1 })
        );
    }
}
