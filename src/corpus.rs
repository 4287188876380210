
// imports
use std::error::Error;
use std::fs;

pub struct Corpus {}

impl Corpus {

    fn read_file(file_path: &str) -> Result<String, Box<dyn Error>> {
        // corpus files are read as latin-1, every byte maps to a single char,
        // so no file is ever rejected for encoding reasons
        let bytes = fs::read(file_path)?;
        Ok(bytes.iter().map(|b| char::from(*b)).collect())
    }

    fn clean(text: &str) -> String {
        // dashes and clause separators become spaces, '!' and '?' close a
        // sentence like '.'
        text.chars()
            .map(|c| match c {
                '-' | '—' | ':' | ';' => ' ',
                '!' | '?' => '.',
                c => c,
            })
            .collect()
    }

    pub fn sentences_from_text(text: &str) -> Vec<Vec<String>> {

        // clean the raw text and split it into tokenized sentences,
        // dropping sentences with no tokens left
        let cleaned = Corpus::clean(text);

        let mut sentences: Vec<Vec<String>> = Vec::new();
        for sentence in cleaned.split('.') {
            let words = Corpus::tokenize(sentence);
            if !words.is_empty() {
                sentences.push(words);
            }
        }

        sentences
    }

    pub fn load(file_paths: &[String]) -> Result<Vec<Vec<String>>, Box<dyn Error>> {

        // read and split every corpus file. Sentences may span line breaks,
        // so each file is read whole before splitting.
        let mut all_sentences = Vec::new();
        for file_path in file_paths {
            let text = Corpus::read_file(file_path)?;
            all_sentences.append(&mut Corpus::sentences_from_text(&text));
        }

        Ok(all_sentences)
    }
}


// defines the behavior needed for tokenizing one sentence
trait Tokenizer {
    fn tokenize(sentence: &str) -> Vec<String>;
}

impl Tokenizer for Corpus {
    // commas are dropped, the rest is lowercased and split on whitespace
    fn tokenize(sentence: &str) -> Vec<String> {
        sentence
            .chars()
            .filter(|c| *c != ',')
            .collect::<String>()
            .to_lowercase()
            .split_whitespace()
            .map(|w| w.to_string())
            .collect()
    }
}
