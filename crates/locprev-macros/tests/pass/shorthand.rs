// Leading-dot shorthand desugars onto Bundle and Locale.
use locprev::localize;

fn main() {
    let value = localize!("Hello", bundle: .module, locale: .current);
    assert_eq!(value, "Hello");

    let with_args = localize!("Hi", locale: .new("pt-BR"));
    assert_eq!(with_args, "Hi");
}
