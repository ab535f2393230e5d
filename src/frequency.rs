use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per distinct symbol.
///
/// Symbols are kept in the order they were first seen. See
/// [`FrequencyTable::seeding_order`] for the order leaves enter the queue.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    pub fn new() -> Self {
        FrequencyTable {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count every symbol of `symbols`. Whitespace and control characters
    /// are ordinary symbols.
    pub fn count<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        symbols.into_iter().fold(Self::new(), |mut table, symbol| {
            table.add(symbol);
            table
        })
    }

    pub fn add(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(symbol.clone(), self.counts.len());
                self.counts.push((symbol, 1));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&slot| self.counts[slot].1)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// `(symbol, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.counts.iter().map(|(symbol, count)| (symbol, *count))
    }
}

/// Symbols that sort ahead of the rest when seeding the queue.
///
/// A symbol with a numeric key behaves like an array index of a keyed
/// table: all of them come first, ascending by key, before every other
/// symbol in first-seen order. For single characters that means the ASCII
/// digits `'0'..='9'`.
pub trait SeedOrder {
    fn numeric_key(&self) -> Option<u32>;
}

impl SeedOrder for char {
    fn numeric_key(&self) -> Option<u32> {
        if self.is_ascii_digit() {
            self.to_digit(10)
        } else {
            None
        }
    }
}

impl SeedOrder for u8 {
    fn numeric_key(&self) -> Option<u32> {
        self.is_ascii_digit().then(|| u32::from(self - b'0'))
    }
}

impl<S: SeedOrder> FrequencyTable<S> {
    /// `(symbol, count)` pairs in the order leaves are inserted into the
    /// priority queue, which decides ties between equal frequencies:
    /// numeric keys ascending, then everything else in first-seen order.
    pub fn seeding_order(&self) -> Vec<(&S, usize)> {
        let mut order: Vec<_> = self.iter().collect();
        // stable, so non-numeric symbols keep first-seen order
        order.sort_by_key(|(symbol, _)| match symbol.numeric_key() {
            Some(key) => (0, key),
            None => (1, 0),
        });
        order
    }
}

impl<S: Eq + Hash + Clone> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::count(iter)
    }
}

pub fn count_frequencies<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
{
    let table = FrequencyTable::count(symbols);
    tracing::debug!(distinct = table.len(), total = table.total(), "counted symbol frequencies");
    table
}
