// Every recognized label at once, with explicit expressions.
use locprev::{localize, Bundle, Locale};

fn main() {
    let value = localize!(
        "Hello",
        table: "Menu",
        bundle: Bundle::main(),
        locale: Locale::new("fr"),
        comment: "greeting shown at startup"
    );
    assert_eq!(value, "Hello");
}
