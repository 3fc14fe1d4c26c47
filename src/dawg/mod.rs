//! Чтение компактного бинарного DAWG (directed acyclic word graph),
//! совместимого с форматом семейства `dawg`/`dawg-python`.

pub(crate) mod completer;
pub(crate) mod dictionary;
pub(crate) mod guide;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use completer::Completer;
pub use dictionary::Dawg;
pub use guide::Guide;
