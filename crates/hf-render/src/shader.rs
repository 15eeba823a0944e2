/// Run `create` inside a validation error scope and log anything it raises.
///
/// The created object is returned either way; wgpu hands back an invalid
/// handle on failure, which later calls tolerate.
pub fn with_validation_scope<T>(
    device: &wgpu::Device,
    what: &str,
    create: impl FnOnce() -> T,
) -> T {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let created = create();

    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => log::error!("{} failed validation:\n{}", what, error),
        None => log::debug!("Created {}", what),
    }

    created
}

/// Compile a WGSL module. Validation errors are logged, not returned.
pub fn create_shader_module(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    with_validation_scope(device, &format!("shader '{}'", label), || {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        })
    })
}

/// Log errors that escape every error scope instead of panicking.
pub fn log_uncaptured_errors(device: &wgpu::Device) {
    device.on_uncaptured_error(std::sync::Arc::new(|error| {
        log::error!("Uncaptured GPU error: {}", error);
    }));
}
