/// Defines flag options.
#[derive(Debug)]
pub struct Options {
    pub log_level: String,
    pub spec_path: String,
    pub skip_prompt: bool,
}
