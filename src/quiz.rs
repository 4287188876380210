
// imports
use crate::descriptors::{Descriptor, SemanticDescriptors};
use crate::similarity::{self, Score};

use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead};

/// Tally of a quiz run. `total` counts evaluated questions only; malformed
/// lines are never part of it.
#[derive(Clone, Debug, Serialize)]
pub struct QuizReport {
    pub correct: usize,
    pub total: usize,
}

impl QuizReport {

    /// Percentage of correct guesses, 0.0 when no question was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

pub struct Quiz {}

impl Quiz {

    pub fn run<F>(
        file_path: &str,
        descriptors: &SemanticDescriptors,
        score_fn: F,
    ) -> Result<QuizReport, Box<dyn Error>>
    where
        F: Fn(&Descriptor, &Descriptor) -> Score,
    {
        let f = File::open(file_path)?;
        let mut lines: Vec<String> = Vec::new();
        for line in io::BufReader::new(f).lines() {
            lines.push(line?);
        }

        Ok(Quiz::evaluate(lines.iter().map(|l| l.as_str()), descriptors, score_fn))
    }

    pub fn evaluate<'a, I, F>(lines: I, descriptors: &SemanticDescriptors, score_fn: F) -> QuizReport
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&Descriptor, &Descriptor) -> Score,
    {
        // each line holds: target word, correct answer, then the choices.
        // lines with fewer than 2 tokens are not questions and are skipped.
        let mut correct = 0;
        let mut total = 0;

        for line in lines {

            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() < 2 {
                continue;
            }

            let target_word = words[0];
            let correct_answer = words[1];
            let choices: Vec<String> = words[2..].iter().map(|w| w.to_string()).collect();

            let guess = similarity::most_similar(target_word, &choices, descriptors, &score_fn);
            if guess == Some(correct_answer) {
                correct += 1;
            }
            total += 1;
        }

        QuizReport { correct, total }
    }
}


#[cfg(test)]
mod tests {

    use super::Quiz;
    use crate::descriptors::SemanticDescriptors;
    use crate::similarity::guarded_similarity;

    fn sentence(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // corpus shared by the accuracy tests:
    // a = {b:1, c:1}, b = {a:1, c:1, d:1}, c = {a:1, b:1, d:1}, d = {b:1, c:1}
    fn descriptors() -> SemanticDescriptors {
        SemanticDescriptors::build(&[
            sentence(&["a", "b"]),
            sentence(&["a", "c"]),
            sentence(&["b", "c", "d"]),
        ])
    }

    #[test]
    fn accuracy_aggregation_test() {

        // line 1: sim(a,d) = 1 beats sim(a,c), guess d, correct
        // line 2: sim(b,c) = 2/3 beats sim(b,d), guess c, correct
        // line 3: guess is still d, but the answer is c, incorrect
        let lines = ["a d d c", "b c c d", "a c d c"];
        let report = Quiz::evaluate(lines, &descriptors(), guarded_similarity);

        assert_eq!(report.correct, 2);
        assert_eq!(report.total, 3);
        assert!((report.accuracy() - 200.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn malformed_lines_are_skipped() {

        let lines = ["", "a", "   ", "a d d c"];
        let report = Quiz::evaluate(lines, &descriptors(), guarded_similarity);

        assert_eq!(report.total, 1);
        assert_eq!(report.correct, 1);
    }

    #[test]
    fn zero_questions_report_zero_accuracy() {

        let report = Quiz::evaluate([], &descriptors(), guarded_similarity);
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy(), 0.0);
    }

    #[test]
    fn two_token_line_counts_as_incorrect() {

        // a valid question with no choices: the guess is absent, the
        // question still counts
        let report = Quiz::evaluate(["a b"], &descriptors(), guarded_similarity);
        assert_eq!(report.total, 1);
        assert_eq!(report.correct, 0);
    }

    #[test]
    fn unknown_words_do_not_fail() {

        // target and choices missing from the corpus read as empty
        // descriptors, ties resolve to the first choice
        let report = Quiz::evaluate(["qq zz zz yy"], &descriptors(), guarded_similarity);
        assert_eq!(report.total, 1);
        assert_eq!(report.correct, 1);
    }

    #[test]
    fn report_serializes_to_json() {

        let report = Quiz::evaluate(["a d d c"], &descriptors(), guarded_similarity);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"correct":1,"total":1}"#);
    }
}
