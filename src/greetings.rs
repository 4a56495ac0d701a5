//! The greeting collaborators behind the CLI.
//!
//! Pure functions so the dispatch layer can be tested through its output.

pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn goodbye(name: &str, formal: bool) -> String {
    if formal {
        format!("Goodbye, {name}. Have a good day.")
    } else {
        format!("Bye, {name}!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_addresses_name() {
        assert_eq!(hello("Alice"), "Hello, Alice!");
    }

    #[test]
    fn goodbye_respects_formality() {
        assert_eq!(goodbye("Bob", false), "Bye, Bob!");
        assert_eq!(goodbye("Bob", true), "Goodbye, Bob. Have a good day.");
    }
}
