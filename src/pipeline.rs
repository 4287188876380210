
// imports
use crate::config::{files_handling, Config};
use crate::corpus::Corpus;
use crate::descriptors::SemanticDescriptors;
use crate::quiz::Quiz;
use crate::similarity;

use core::panic;
use std::env;
use std::time::Instant;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> descriptor building from the corpus
    // -> quiz evaluation

    pub fn run() {

        println!("entering program...");
        let args: Vec<String> = env::args().collect();

        println!("building parameters...");
        let params = match Config::new(&args) {
            Ok(config) => config.get_params(),
            Err(e) => panic!("{}", e)
        };
        println!("{}", params);

        // load and tokenize the corpus
        let timer = Instant::now();
        println!("loading corpus...");
        let sentences = match Corpus::load(&params.corpus_files) {
            Ok(sentences) => sentences,
            Err(e) => panic!("{}", e)
        };
        println!("loaded {} sentences, took {} seconds ...", sentences.len(), timer.elapsed().as_secs());

        // build the co-occurrence table
        let timer = Instant::now();
        println!("building semantic descriptors...");
        let descriptors = SemanticDescriptors::build(&sentences);
        if params.progress_verbose {
            println!("descriptor table holds {} words", descriptors.len());
        }
        println!("finished descriptors, took {} seconds ...", timer.elapsed().as_secs());

        // run the quiz
        let timer = Instant::now();
        println!("running similarity quiz...");
        let report = match Quiz::run(&params.quiz_file, &descriptors, similarity::guarded_similarity) {
            Ok(report) => report,
            Err(e) => panic!("{}", e)
        };
        println!("{} of the guesses were correct ({} out of {})", report.accuracy(), report.correct, report.total);
        println!("finished quiz, took {} seconds ...", timer.elapsed().as_secs());

        // save the report when an output folder was given
        if let Some(output_dir) = &params.output_dir {
            if let Err(e) = files_handling::save_output(output_dir, "report", report) {
                panic!("{}", e)
            }
            println!("saved report to {}", output_dir);
        }
    }
}
