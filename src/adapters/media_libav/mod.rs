// Media LibAV adapter - Frame-accurate seeking and decoding using libav

use std::path::{Path, PathBuf};

use ffmpeg_next::{
    codec, format, frame, media,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
    util::format::Pixel,
    Rational,
};
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::FrameRate;
use crate::ports::*;

/// Seek positions for `Input::seek` are in microseconds
const AV_TIME_BASE: f64 = 1_000_000.0;

/// Decoder state for one opened video stream
struct OpenedSource {
    input: format::context::Input,
    stream_index: usize,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ScalingContext,
    time_base: Rational,
    start_pts: i64,
    frame_rate: FrameRate,
    frame_count: u64,
    /// Frame the next read should return
    target: u64,
    /// End of file reached and the decoder was told so
    draining: bool,
}

/// libav-backed [`MediaPort`]
///
/// Seeks land on the keyframe before the target; frames are then decoded
/// and discarded until the target index is reached, so reads are exact
/// even for long GOPs.
#[derive(Default)]
pub struct LibavMediaAdapter {
    source: Option<OpenedSource>,
}

impl LibavMediaAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn opened(&mut self) -> Result<&mut OpenedSource, DomainError> {
        self.source
            .as_mut()
            .ok_or_else(|| DomainError::BadArgs("No video is open".to_string()))
    }
}

fn open_error(path: &Path, message: impl ToString) -> DomainError {
    DomainError::OpenFail {
        path: PathBuf::from(path),
        message: message.to_string(),
    }
}

fn rational_seconds(value: i64, time_base: Rational) -> f64 {
    value as f64 * time_base.numerator() as f64 / time_base.denominator() as f64
}

/// Copy an RGB24 plane into a buffer without row padding
fn frame_to_rgb_buffer(video_frame: &frame::Video, width: u32, height: u32) -> Vec<u8> {
    let stride = video_frame.stride(0);
    let row_bytes = width as usize * 3;
    let data = video_frame.data(0);

    if stride == row_bytes {
        data[..row_bytes * height as usize].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(row_bytes * height as usize);
        for row in 0..height as usize {
            let row_start = row * stride;
            buffer.extend_from_slice(&data[row_start..row_start + row_bytes]);
        }
        buffer
    }
}

impl OpenedSource {
    fn open(path: &Path) -> Result<Self, DomainError> {
        let input = format::input(path).map_err(|e| open_error(path, e))?;

        let (stream_index, time_base, start_pts, frame_rate, frame_count, decoder) = {
            let stream = input
                .streams()
                .best(media::Type::Video)
                .ok_or_else(|| open_error(path, "no video stream"))?;

            let mut rate = stream.avg_frame_rate();
            if rate.numerator() <= 0 || rate.denominator() <= 0 {
                rate = stream.rate();
            }
            if rate.numerator() <= 0 || rate.denominator() <= 0 {
                return Err(open_error(path, "video stream has no frame rate"));
            }
            let frame_rate = FrameRate::new(rate.numerator() as u32, rate.denominator() as u32)
                .map_err(|e| open_error(path, e))?;

            let time_base = stream.time_base();
            let start_pts = if stream.start_time() == ffmpeg_next::ffi::AV_NOPTS_VALUE {
                0
            } else {
                stream.start_time()
            };

            // Container headers do not always carry a frame count
            let frame_count = if stream.frames() > 0 {
                stream.frames() as u64
            } else if stream.duration() > 0 {
                (rational_seconds(stream.duration(), time_base) * frame_rate.as_f64()).round()
                    as u64
            } else if input.duration() > 0 {
                (input.duration() as f64 / AV_TIME_BASE * frame_rate.as_f64()).round() as u64
            } else {
                0
            };

            let context = codec::context::Context::from_parameters(stream.parameters())
                .map_err(|e| open_error(path, e))?;
            let decoder = context.decoder().video().map_err(|e| open_error(path, e))?;

            (
                stream.index(),
                time_base,
                start_pts,
                frame_rate,
                frame_count,
                decoder,
            )
        };

        let scaler = ScalingContext::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            Pixel::RGB24,
            decoder.width(),
            decoder.height(),
            ScalingFlags::BILINEAR,
        )
        .map_err(|e| open_error(path, e))?;

        Ok(Self {
            input,
            stream_index,
            decoder,
            scaler,
            time_base,
            start_pts,
            frame_rate,
            frame_count,
            target: 0,
            draining: false,
        })
    }

    fn decode_error(&self, message: impl ToString) -> DomainError {
        DomainError::DecodeFail {
            frame: self.target,
            message: message.to_string(),
        }
    }

    fn seek(&mut self, frame_index: u64) -> Result<(), DomainError> {
        let start_offset = rational_seconds(self.start_pts, self.time_base);
        let seconds = self.frame_rate.frames_to_seconds(frame_index) + start_offset;
        let timestamp = (seconds * AV_TIME_BASE) as i64;

        self.target = frame_index;
        self.input
            .seek(timestamp, ..timestamp)
            .map_err(|e| self.decode_error(e))?;
        self.decoder.flush();
        self.draining = false;
        Ok(())
    }

    /// Frame index of a decoded frame from its timestamp
    fn frame_index(&self, decoded: &frame::Video) -> u64 {
        match decoded.timestamp().or_else(|| decoded.pts()) {
            Some(pts) => {
                let seconds = rational_seconds(pts - self.start_pts, self.time_base);
                (seconds * self.frame_rate.as_f64()).round().max(0.0) as u64
            }
            None => self.target,
        }
    }

    /// Decode the next frame; `false` once the stream is exhausted
    fn next_decoded(&mut self, decoded: &mut frame::Video) -> Result<bool, DomainError> {
        loop {
            if self.decoder.receive_frame(decoded).is_ok() {
                return Ok(true);
            }
            if self.draining {
                return Ok(false);
            }

            let index = self.stream_index;
            let packet = self
                .input
                .packets()
                .find_map(|(stream, packet)| (stream.index() == index).then_some(packet));

            match packet {
                Some(packet) => self
                    .decoder
                    .send_packet(&packet)
                    .map_err(|e| self.decode_error(e))?,
                None => {
                    self.decoder.send_eof().map_err(|e| self.decode_error(e))?;
                    self.draining = true;
                }
            }
        }
    }

    fn read_frame(&mut self) -> Result<FrameImage, DomainError> {
        let mut decoded = frame::Video::empty();
        loop {
            if !self.next_decoded(&mut decoded)? {
                return Err(self.decode_error("end of stream"));
            }
            if self.frame_index(&decoded) >= self.target {
                break;
            }
        }

        let mut rgb = frame::Video::empty();
        self.scaler
            .run(&decoded, &mut rgb)
            .map_err(|e| self.decode_error(e))?;

        let (width, height) = (rgb.width(), rgb.height());
        let image = FrameImage::new(width, height, frame_to_rgb_buffer(&rgb, width, height))?;
        self.target += 1;
        Ok(image)
    }
}

impl MediaPort for LibavMediaAdapter {
    fn open(&mut self, path: &Path) -> Result<(), DomainError> {
        let source = OpenedSource::open(path)?;
        info!(
            "Opened {}: {} frames at {}",
            path.display(),
            source.frame_count,
            source.frame_rate
        );
        self.source = Some(source);
        Ok(())
    }

    fn frame_count(&self) -> u64 {
        self.source.as_ref().map_or(0, |source| source.frame_count)
    }

    /// Frame rate of the open video; 25 fps before anything is opened
    fn frame_rate(&self) -> FrameRate {
        self.source
            .as_ref()
            .map_or(FrameRate::fps_25(), |source| source.frame_rate)
    }

    fn seek(&mut self, frame_index: u64) -> Result<(), DomainError> {
        debug!(frame = frame_index, "Seeking");
        self.opened()?.seek(frame_index)
    }

    fn read_frame(&mut self) -> Result<FrameImage, DomainError> {
        self.opened()?.read_frame()
    }
}
