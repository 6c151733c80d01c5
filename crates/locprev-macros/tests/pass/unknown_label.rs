// Labels outside the recognized set are dropped without a diagnostic.
use locprev::localize;

fn main() {
    let value = localize!("Hello", zone: 12, priority: "high");
    assert_eq!(value, "Hello");
}
