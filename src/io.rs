//! Frame sources and steering sinks for running the loop outside a robot.

use crate::error::FrameError;
use crate::pipeline::{FrameSource, SteeringSink};
use image::{ImageReader, RgbImage};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::info;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Reads frames from image files in order
pub struct ImageFileSource {
    paths: VecDeque<PathBuf>,
}

impl ImageFileSource {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    /// Expand directories to their image files (sorted by name); files are kept as given.
    pub fn from_args(args: &[PathBuf]) -> std::io::Result<Self> {
        let mut paths = Vec::new();
        for arg in args {
            if arg.is_dir() {
                let mut entries: Vec<PathBuf> = std::fs::read_dir(arg)?
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .filter(|p| is_image_file(p))
                    .collect();
                entries.sort();
                paths.extend(entries);
            } else {
                paths.push(arg.clone());
            }
        }
        Ok(Self::new(paths))
    }

    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

impl FrameSource for ImageFileSource {
    fn next_frame(&mut self) -> Option<Result<RgbImage, FrameError>> {
        let path = self.paths.pop_front()?;
        let frame = ImageReader::open(&path)
            .map_err(|e| FrameError::Acquisition(format!("{}: {}", path.display(), e)))
            .and_then(|reader| reader.decode().map_err(FrameError::from))
            .map(|img| img.to_rgb8());
        Some(frame)
    }
}

/// Serves frames already in memory
pub struct MemorySource {
    frames: VecDeque<Result<RgbImage, FrameError>>,
}

impl MemorySource {
    pub fn new(frames: impl IntoIterator<Item = Result<RgbImage, FrameError>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl FrameSource for MemorySource {
    fn next_frame(&mut self) -> Option<Result<RgbImage, FrameError>> {
        self.frames.pop_front()
    }
}

/// Logs each value and prints it as `key=value`
#[derive(Debug, Default)]
pub struct LogSink;

impl SteeringSink for LogSink {
    fn publish(&mut self, key: &str, value: i32) {
        info!("Publishing {}={}", key, value);
        println!("{}={}", key, value);
    }
}

/// Records every published value
#[derive(Debug, Default)]
pub struct MemorySink {
    pub values: Vec<(String, i32)>,
}

impl MemorySink {
    pub fn last(&self) -> Option<i32> {
        self.values.last().map(|(_, v)| *v)
    }
}

impl SteeringSink for MemorySink {
    fn publish(&mut self, key: &str, value: i32) {
        self.values.push((key.to_string(), value));
    }
}
