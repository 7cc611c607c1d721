use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Resizes to the model input and lays pixels out as NCHW, normalized with
/// the ImageNet channel statistics MobileNet was trained with.
pub fn image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    let resized = image.resize_exact(width, height, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    tract_ndarray::Array4::from_shape_fn(
        (1, 3, height as usize, width as usize),
        |(_, c, y, x)| {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            (pixel[c] as f32 / 255.0 - IMAGENET_MEAN[c]) / IMAGENET_STD[c]
        },
    )
    .into_tensor()
}
