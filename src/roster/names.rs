//! Survivor name pool
//!
//! Names are unique per playthrough. Each pool owns its own remaining-name
//! list, so drawing from one game never affects another.

use rand::Rng;
use serde::Serialize;

const NAME_TABLE: [&str; 38] = [
    "John Robinson",
    "Christina Taylor",
    "Kenneth Laker",
    "Saleem Kassam",
    "Santosh Venkatesh",
    "Roch Guren",
    "Sue Ellen Goodwin",
    "Zachary Redding",
    "Anton Epstein",
    "Lauren Blake",
    "Alyssa Chapman",
    "Ashley Dougherty",
    "Stephanie Griffin",
    "Janus Worthing",
    "Hyun-woo Kim",
    "Seo-yeon Lee",
    "Wei Wang",
    "Xiao Ying Zhang",
    "Akira Konno",
    "Yoshiko Yamada",
    "Juan Martinez",
    "Mercedes Garcia",
    "Gabriel Laurent",
    "Chloe Dubois",
    "Lucas Schmidt",
    "Anna Muller",
    "Mahmoud Assaf",
    "Farida Nazari",
    "Yosef Ovitz",
    "Talia Mizrahi",
    "Ivan Petrov",
    "Sofya Ivanov",
    "Hugo Johansson",
    "Elsa Lindholm",
    "Dagur Scheving",
    "Rakel Briem",
    "Biruk Bekele",
    "Qali Worku",
];

/// Draws unique names until exhausted, then refills
#[derive(Debug, Clone, Serialize)]
pub struct NamePool {
    remaining: Vec<&'static str>,
}

impl NamePool {
    pub fn new() -> Self {
        Self {
            remaining: NAME_TABLE.to_vec(),
        }
    }

    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        if self.remaining.is_empty() {
            self.remaining = NAME_TABLE.to_vec();
        }
        let idx = rng.gen_range(0..self.remaining.len());
        self.remaining.swap_remove(idx)
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new()
    }
}
