
// imports
use std::collections::{HashMap, HashSet};

/// A sparse co-occurrence count vector: co-occurring word -> number of
/// sentences shared with the owning word.
pub type Descriptor = HashMap<String, usize>;

pub struct SemanticDescriptors {
    table: HashMap<String, Descriptor>,
    empty: Descriptor,
}

impl SemanticDescriptors {

    pub fn build(sentences: &[Vec<String>]) -> SemanticDescriptors {

        // this method populates the table with co-occurrence counts in a single pass
        // over the corpus. Each sentence contributes 1 to table[w][x] for every pair
        // (w, x) of distinct tokens it holds, no matter how often either token repeats
        // inside that sentence. Counts accumulate additively across sentences.

        let mut table: HashMap<String, Descriptor> = HashMap::new();

        for sentence in sentences {

            let unique_words: HashSet<&String> = sentence.iter().collect();

            for word in &unique_words {

                // a lone token still gets its (empty) entry
                let descriptor = table.entry((*word).to_owned()).or_insert_with(Descriptor::new);

                for other_word in &unique_words {
                    if word != other_word {
                        let val = descriptor.entry((*other_word).to_owned()).or_insert(0);
                        *val += 1;
                    }
                }
            }
        }

        Self { table, empty: Descriptor::new() }
    }

    /// Descriptor of `word`. Unknown words read as empty descriptors; the
    /// default lives here, not at call sites.
    pub fn descriptor(&self, word: &str) -> &Descriptor {
        self.table.get(word).unwrap_or(&self.empty)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }

    /// Number of distinct words seen in the corpus.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}


#[cfg(test)]
mod tests {

    use super::{Descriptor, SemanticDescriptors};

    fn sentence(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // the tests check the table against golden examples computed by hand,
    // one count per sentence a pair shares.

    #[test]
    fn build_test() {

        let sentences = vec![sentence(&["a", "b"]), sentence(&["a", "c"])];
        let descriptors = SemanticDescriptors::build(&sentences);

        let mut a_golden = Descriptor::new();
        a_golden.insert("b".to_string(), 1);
        a_golden.insert("c".to_string(), 1);
        let mut b_golden = Descriptor::new();
        b_golden.insert("a".to_string(), 1);
        let mut c_golden = Descriptor::new();
        c_golden.insert("a".to_string(), 1);

        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors.descriptor("a"), &a_golden);
        assert_eq!(descriptors.descriptor("b"), &b_golden);
        assert_eq!(descriptors.descriptor("c"), &c_golden);
    }

    #[test]
    fn repetition_does_not_inflate_counts() {

        // "a" appears twice in the sentence, the pair (a, b) still counts once
        let sentences = vec![sentence(&["a", "a", "b"])];
        let descriptors = SemanticDescriptors::build(&sentences);

        let mut a_golden = Descriptor::new();
        a_golden.insert("b".to_string(), 1);
        let mut b_golden = Descriptor::new();
        b_golden.insert("a".to_string(), 1);

        assert_eq!(descriptors.descriptor("a"), &a_golden);
        assert_eq!(descriptors.descriptor("b"), &b_golden);
    }

    #[test]
    fn single_word_sentence_gets_empty_entry() {

        let sentences = vec![sentence(&["x"])];
        let descriptors = SemanticDescriptors::build(&sentences);

        assert!(descriptors.contains("x"));
        assert!(descriptors.descriptor("x").is_empty());
    }

    #[test]
    fn counts_accumulate_across_sentences() {

        let sentences = vec![
            sentence(&["a", "b"]),
            sentence(&["a", "b", "c"]),
        ];
        let descriptors = SemanticDescriptors::build(&sentences);

        assert_eq!(descriptors.descriptor("a").get("b"), Some(&2));
        assert_eq!(descriptors.descriptor("b").get("a"), Some(&2));
        assert_eq!(descriptors.descriptor("a").get("c"), Some(&1));
    }

    #[test]
    fn no_self_entries() {

        let sentences = vec![sentence(&["a", "b", "a"])];
        let descriptors = SemanticDescriptors::build(&sentences);

        assert!(descriptors.descriptor("a").get("a").is_none());
        assert!(descriptors.descriptor("b").get("b").is_none());
    }

    #[test]
    fn unknown_word_reads_as_empty() {

        let descriptors = SemanticDescriptors::build(&[]);
        assert!(descriptors.is_empty());
        assert!(descriptors.descriptor("missing").is_empty());
    }
}
