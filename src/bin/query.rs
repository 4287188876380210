use core::panic;
use std::env;
extern crate synonym_solver;
use synonym_solver::{guarded_similarity, most_similar, Corpus, SemanticDescriptors};

// this module has some ad-hoc checks against a corpus: build descriptors from
// one file and rank a handful of choices against a word.
// treated as binary executable so it can be ran independently from main

fn main() {

    // arguments to this executable should be:
    // a path to a corpus file, the target word, then the choices
    // example: ... wp.txt dog cat wolf table
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 { panic!("expected: <corpus_file> <word> <choice> [<choice> ...]"); }
    let corpus_file = args[1].clone();
    let word = &args[2];
    let choices = args[3..].to_vec();

    // read the corpus and build the co-occurrence table
    let sentences = match Corpus::load(&[corpus_file]) {
        Ok(sentences) => sentences,
        Err(e) => panic!("{}", e)
    };
    let descriptors = SemanticDescriptors::build(&sentences);
    println!("built descriptors for {} words from {} sentences", descriptors.len(), sentences.len());

    // score every choice against the word
    for choice in &choices {
        let score = guarded_similarity(descriptors.descriptor(word), descriptors.descriptor(choice));
        println!("{} ? {} = {}", word, choice, score.to_sentinel());
    }

    match most_similar(word, &choices, &descriptors, guarded_similarity) {
        Some(best) => println!("most similar to {} : {}", word, best),
        None => println!("no choices given"),
    }
}
