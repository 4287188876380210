use synonym_solver::Pipeline;

fn main() {
    Pipeline::run();
}
