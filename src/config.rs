
// imports
use serde_json::Value;
use std::error::Error;
use std::fmt::Display;
use std::fs;

#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub corpus_files: Vec<String>,
    pub quiz_file: String,
    pub output_dir: Option<String>,
    pub progress_verbose: bool,
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using parameters:
        corpus_files: {:?}
        quiz_file: {}
        output_dir: {:?}
        progress_verbose: {}",
        self.corpus_files, self.quiz_file, self.output_dir, self.progress_verbose)
    }
}

pub struct Config {
    params: JsonTypes,
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config, Box<dyn Error>> {

        if args.len() != 2 {
            return Err("input should be a path to json file only".to_string().into());
        }

        // parse input json
        let f = fs::File::open(&args[1]).expect("cannot open json file");
        let json: Value = serde_json::from_reader(f).expect("cannot read json file");

        // validate input files in json
        let corpus_files = json
            .get("corpus_files")
            .expect("corpus_files was not supplied through json")
            .as_array()
            .expect("cannot cast corpus_files to array")
            .iter()
            .map(|v| v.as_str().expect("cannot cast corpus file to string").to_owned())
            .collect::<Vec<String>>();
        let quiz_file = json
            .get("quiz_file")
            .expect("quiz_file was not supplied through json")
            .as_str()
            .expect("cannot cast quiz_file to string");

        // handle default vs input parameters
        let output_dir = match json.get("output_dir") {
            Some(output_dir) => Some(output_dir.as_str().expect("panic since given output_dir is not a string").to_owned()),
            None => None,
        };
        let progress_verbose = match json.get("progress_verbose") {
            Some(progress_verbose) => progress_verbose.as_bool().expect("panic since given progress_verbose is not boolean"),
            None => false,
        };

        let params = JsonTypes {
            corpus_files,
            quiz_file: quiz_file.to_owned(),
            output_dir,
            progress_verbose,
        };

        Ok(Self { params })
    }
}


pub mod files_handling {

    use crate::quiz::QuizReport;

    use std::error::Error;
    use std::fs::{self, File};
    use std::io::BufWriter;

    pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: S) -> Result<(), <S as SaveFile>::Error> {

        // create output folder
        if let Err(e) = fs::create_dir_all(output_dir) {
            panic!("{}", e)
        }

        item.save_file(output_dir, file_name)?;
        Ok(())
    }

    pub trait SaveFile {
        type Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error>;
    }

    impl SaveFile for QuizReport {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".json";
            let f = BufWriter::new(File::create(out)?);
            serde_json::to_writer(f, self)?;
            Ok(())
        }
    }
}
