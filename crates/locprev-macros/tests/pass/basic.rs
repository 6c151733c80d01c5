// A bare key expands and falls back to itself without resources on disk.
use locprev::localize;

fn main() {
    let greeting = localize!("Hello");
    assert_eq!(greeting, "Hello");
}
