//! Fills a 23-element sequence from the modulo-product formula, prints it,
//! sorts it in place and prints it again.

use std::io::{self, Write};

use quicksort_branchy::{patterns, quicksort};

const DEMO_LEN: usize = 23;

fn write_sequence(out: &mut impl Write, label: &str, v: &[i32]) -> io::Result<()> {
    write!(out, "{label} ")?;
    for elem in v {
        write!(out, " {elem}")?;
    }
    writeln!(out)
}

fn main() -> io::Result<()> {
    let mut v = patterns::modulo_product(DEMO_LEN);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_sequence(&mut out, "Order of unsorted elements:", &v)?;
    quicksort::sort(&mut v);
    write_sequence(&mut out, "Order of Sorted elements:", &v)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_matches_reference() {
        let mut v = patterns::modulo_product(DEMO_LEN);

        let mut out = Vec::new();
        write_sequence(&mut out, "Order of unsorted elements:", &v).unwrap();
        quicksort::sort(&mut v);
        write_sequence(&mut out, "Order of Sorted elements:", &v).unwrap();

        // Each element renders as " {elem}" after a label ending in a
        // space, hence the double space before the first element.
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Order of unsorted elements:  0 18 7 13 13 7 18 0 7 17 21 19 11 1 0 19 4 6 2 0 3 0 8\n\
             Order of Sorted elements:  0 0 0 0 0 1 2 3 4 6 7 7 7 8 11 13 13 17 18 18 19 19 21\n"
        );
    }
}
