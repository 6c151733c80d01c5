// Duplicate labels are not an error; the last value wins.
use locprev::localize;

fn main() {
    let value = localize!("Hello", table: "First", table: "Second");
    assert_eq!(value, "Hello");
}
