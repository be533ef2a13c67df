//! Adapters wiring application ports to concrete implementations

pub mod fs_audio_store;
pub mod generation_adapter;
pub mod speech_adapter;

pub use fs_audio_store::FsAudioStore;
pub use generation_adapter::GenerationAdapter;
pub use speech_adapter::SpeechAdapter;
