use skimmer_extract::ExtractPipeline;

pub struct AppState {
    pub pipeline: ExtractPipeline,
}
