// Owned values supplied as arguments are evaluated and moved exactly once,
// even though they are referenced from both generated paths.
use locprev::{localize, Bundle, Locale};

fn main() {
    let table = String::from("Menu");
    let bundle = Bundle::main();
    let locale = Locale::new("de");

    let value = localize!("Hello", table: table, bundle: bundle, locale: locale);
    assert_eq!(value, "Hello");
}
