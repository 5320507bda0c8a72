#[cfg(test)]
mod hex_tests;
#[cfg(test)]
mod loader_tests;
