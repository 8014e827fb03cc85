// Passing records into and out of functions.
//
// Three calling conventions on the same record type: taking ownership of a
// value (the caller keeps its original only by passing a clone), borrowing
// mutably (changes are visible to the caller), and returning a record built
// inside the function.

use crate::movie::Movie;

/// Takes the record by value and overwrites both fields. The function owns
/// this copy, so the mutation is local: a caller that passed a clone still
/// holds its original, unchanged.
pub fn pass_by_value(mut movie: Movie) {
    println!("... inside pass_by_value: {}", movie);
    movie.title = String::from("Flash Gordon");
    movie.year = 1980;
    println!("... local copy is now:   {}", movie);
}

/// Borrows the record mutably and overwrites both fields. The caller sees
/// the new values afterward.
pub fn pass_by_reference(movie: &mut Movie) {
    movie.title = String::from("Blade Runner");
    movie.year = 1982;
}

/// Builds a record inside the function and returns it by value. The caller
/// takes ownership of the result.
pub fn return_a_struct() -> Movie {
    Movie::new("Joker", 2019)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_by_value_leaves_the_callers_original_unchanged() {
        let original = Movie::new("2001 A Space Odyssey", 1968);
        pass_by_value(original.clone());
        assert_eq!(original, Movie::new("2001 A Space Odyssey", 1968));
    }

    #[test]
    fn pass_by_reference_mutation_is_visible_to_the_caller() {
        let mut movie = Movie::new("2001 A Space Odyssey", 1968);
        pass_by_reference(&mut movie);
        assert_eq!(movie, Movie::new("Blade Runner", 1982));
    }

    #[test]
    fn returned_struct_is_owned_by_the_caller() {
        let movie = return_a_struct();
        assert_eq!(movie, Movie::new("Joker", 2019));
    }
}
