use crate::sys::sampler::SampleError;
use socialfab::model::HexColor;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Command(String),
    InputClosed,
    ColorSampled(HexColor),
    SampleFailed(SampleError),
    Copied,
    CopyFailed(String),
    SettingsReload,
}
