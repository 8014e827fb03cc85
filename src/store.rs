// Owned allocation, release, and traversal of movie records.
//
// A manual new/delete pairing becomes owned handles: a Box for a single
// record, a boxed slice for a fixed-length block. Release consumes the
// handle, which rules out double release and use after release at compile
// time. Traversal is bounds-checked slice iteration, not pointer walking.

use crate::movie::Movie;

/// Allocate a single heap-resident record with default field values.
/// Ownership transfers to the caller; dropping the box releases it.
pub fn allocate_one() -> Box<Movie> {
    Box::new(Movie::default())
}

/// Release a single record by consuming its handle.
pub fn release_one(movie: Box<Movie>) {
    drop(movie);
}

/// Allocate a block of `len` default-initialized records.
/// `len == 0` yields a valid empty block. The block has a fixed length:
/// no resizing, insertion, or removal after allocation.
pub fn allocate_array(len: usize) -> Box<[Movie]> {
    vec![Movie::default(); len].into_boxed_slice()
}

/// Release a whole block in one operation by consuming its handle.
/// Partial release is not expressible.
pub fn release_array(movies: Box<[Movie]>) {
    drop(movies);
}

/// Visit every record in index order, yielding `(index, title, year)`.
/// Lazy and restartable: calling it again on the same slice starts a fresh
/// pass. Does not mutate the records.
pub fn traverse(movies: &[Movie]) -> impl Iterator<Item = (usize, &str, i32)> {
    movies
        .iter()
        .enumerate()
        .map(|(index, movie)| (index, movie.title.as_str(), movie.year))
}
