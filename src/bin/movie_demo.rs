// Walks through the record-handling patterns end to end: a stack record, a
// record read from the console, value vs. reference passing, a returned
// record, a stack array, and heap allocation of a single record and of a
// block, each released exactly once.

use anyhow::Result;
use colored::Colorize;
use movie_records::input::{parse_array_len, parse_year, prompt};
use movie_records::ownership::{pass_by_reference, pass_by_value, return_a_struct};
use movie_records::store::{allocate_array, allocate_one, release_array, release_one, traverse};
use movie_records::Movie;

/// Print every record in the slice as `index: title, year`.
fn print_all(movies: &[Movie]) {
    for (index, title, year) in traverse(movies) {
        println!("{}: {}, {}", index, title, year);
    }
}

fn main() -> Result<()> {
    println!("{}", "=== Structs demo ===".bold());

    // A record on the stack, populated by direct field assignment.
    let mut my_favourite = Movie::default();
    my_favourite.title = String::from("2001 A Space Odyssey");
    my_favourite.year = 1968;
    println!("My favourite movie is:\n  {}", my_favourite);

    // Read a record from the console. A malformed year is reported and the
    // field stays at its default rather than being silently swallowed.
    println!("What is your favourite movie?");
    let mut your_favourite = Movie::default();
    your_favourite.title = prompt("Enter title: ")?;
    match parse_year(&prompt("Enter year: ")?) {
        Ok(year) => your_favourite.year = year,
        Err(err) => eprintln!("Warning: {}; year left at {}", err, your_favourite.year),
    }
    println!("And your favourite movie is:\n  {}", your_favourite);

    println!("{}", "=== Pass by value ===".bold());
    println!("Before: {}", my_favourite);
    pass_by_value(my_favourite.clone());
    println!("After:  {}", my_favourite);
    println!("The original is unchanged: the function mutated its own copy.");

    println!("{}", "=== Pass by reference ===".bold());
    println!("Before: {}", your_favourite);
    pass_by_reference(&mut your_favourite);
    println!("After:  {}", your_favourite);
    println!("The mutation through the borrow is visible here.");

    println!("{}", "=== Struct returned by a function ===".bold());
    let returned = return_a_struct();
    println!("  {}", returned);

    println!("{}", "=== Array of structs ===".bold());
    let top3 = [
        Movie::new("Jaws", 1978),
        Movie::new("Alien", 1987),
        Movie::new("Rug Rats", 1995),
    ];
    print_all(&top3);

    println!("{}", "=== Heap-allocated record ===".bold());
    let mut boxed = allocate_one();
    boxed.title = String::from("Baby Driver");
    boxed.year = 2016;
    println!("{}", boxed.title);
    println!("{}", boxed.year);
    release_one(boxed);

    println!("{}", "=== Heap-allocated block of records ===".bold());
    let size_line = prompt("Enter size of block [3]: ")?;
    let len = if size_line.is_empty() {
        3
    } else {
        match parse_array_len(&size_line) {
            Ok(len) => len,
            Err(err) => {
                eprintln!("Warning: {}; using 3", err);
                3
            }
        }
    };

    let mut movies = allocate_array(len);
    let stock = [
        ("Judge Dredd", 2012),
        ("Midnight Express", 1987),
        ("Independence Day", 2004),
    ];
    for (slot, (title, year)) in movies.iter_mut().zip(stock) {
        slot.title = String::from(title);
        slot.year = year;
    }

    if movies.len() > 1 {
        println!("Second record in the block:");
        println!("{}", movies[1].title);
        println!("{}", movies[1].year);
    }
    print_all(&movies);
    release_array(movies);

    Ok(())
}
