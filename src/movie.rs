use std::fmt;

/// A movie record: a title and a release year.
///
/// A plain data record with public fields, read and mutated directly. No
/// validation on either field. Equality is structural and the default value
/// is an empty title with year 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
}

impl Movie {
    /// Build a populated record.
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_empty_title_year_zero() {
        let movie = Movie::default();
        assert_eq!(movie.title, "");
        assert_eq!(movie.year, 0);
    }

    #[test]
    fn field_round_trip() {
        let mut movie = Movie::default();
        movie.title = String::from("2001 A Space Odyssey");
        movie.year = 1968;
        assert_eq!(movie.title, "2001 A Space Odyssey");
        assert_eq!(movie.year, 1968);
    }

    #[test]
    fn display_is_title_then_year_in_parens() {
        let movie = Movie::new("Joker", 2019);
        assert_eq!(movie.to_string(), "Joker (2019)");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Movie::new("Jaws", 1978), Movie::new("Jaws", 1978));
        assert_ne!(Movie::new("Jaws", 1978), Movie::new("Jaws", 1979));
    }

    proptest! {
        #[test]
        fn field_round_trip_holds_for_any_values(title: String, year: i32) {
            let mut movie = Movie::default();
            movie.title = title.clone();
            movie.year = year;
            prop_assert_eq!(movie.title, title);
            prop_assert_eq!(movie.year, year);
        }
    }
}
