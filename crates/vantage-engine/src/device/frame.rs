/// One acquired swapchain image plus the encoder recording into it.
///
/// Submit promptly: holding the surface texture blocks the next acquisition.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
