use crate::error::DecodeError;
use image::imageops::FilterType;
use tract_onnx::prelude::*;

/// A single image normalized into the tensor the food model consumes:
/// shape (1, size, size, 3), f32, channel values scaled to [0, 1].
/// Built per request and dropped after inference.
pub struct NormalizedImage {
    tensor: Tensor,
    size: u32,
}

impl NormalizedImage {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }
}

/// Decode raw upload bytes and normalize them for inference: 3-channel RGB,
/// exact resize to size x size, intensities scaled 1/255, leading batch
/// dimension. Codec failures surface as DecodeError; nothing else can fail.
pub fn normalize(image_bytes: &[u8], size: u32) -> Result<NormalizedImage, DecodeError> {
    let decoded = image::load_from_memory(image_bytes)?;
    let rgb = decoded.to_rgb8();
    let resized = image::imageops::resize(&rgb, size, size, FilterType::Triangle);

    let tensor: Tensor = tract_ndarray::Array4::from_shape_fn(
        (1, size as usize, size as usize, 3),
        |(_, y, x, c)| f32::from(resized[(x as u32, y as u32)][c]) / 255.0,
    )
    .into();

    Ok(NormalizedImage { tensor, size })
}
