#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};
    use hf_core::camera::Camera;
    use hf_core::scene::{self, SceneLighting};

    use crate::mesh::{InstanceRaw, Vertex, CUBE_VERTEX_COUNT, CUBE_VERTICES};
    use crate::renderer::{create_pipeline, cube_instances, lamp_instances, LAMP_SHADER, LIGHTING_SHADER};
    use crate::shader::{create_shader_module, log_uncaptured_errors};
    use crate::texture::checkerboard;
    use crate::uniforms::{CameraUniform, LightsUniform, PointLightRaw, SpotLightRaw};

    #[test]
    fn test_uniform_layout() {
        // Sizes must match the WGSL structs in shaders/.
        assert_eq!(std::mem::size_of::<CameraUniform>(), 144);
        assert_eq!(std::mem::size_of::<PointLightRaw>(), 80);
        assert_eq!(std::mem::size_of::<SpotLightRaw>(), 112);
        assert_eq!(std::mem::size_of::<LightsUniform>(), 512);
        assert_eq!(std::mem::size_of::<LightsUniform>() % 16, 0);
    }

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 64);
        assert_eq!(Vertex::layout().attributes.len(), 3);
        assert_eq!(Vertex::position_layout().attributes.len(), 1);
        assert_eq!(Vertex::position_layout().array_stride, Vertex::layout().array_stride);
    }

    #[test]
    fn test_cube_vertices() {
        assert_eq!(CUBE_VERTICES.len() as u32, CUBE_VERTEX_COUNT);

        for vertex in CUBE_VERTICES.iter() {
            let position = Vec3::from_array(vertex.position);
            let normal = Vec3::from_array(vertex.normal);

            assert!((normal.length() - 1.0).abs() < 1e-6);
            // Every vertex lies on the face its normal points out of.
            assert!((position.dot(normal) - 0.5).abs() < 1e-6);
            assert!(vertex.tex_coords.iter().all(|t| (0.0..=1.0).contains(t)));
        }
    }

    #[test]
    fn test_scene_instances() {
        let cubes = cube_instances();
        let lamps = lamp_instances();

        assert_eq!(cubes.len(), scene::CUBE_POSITIONS.len());
        assert_eq!(lamps.len(), scene::POINT_LIGHT_POSITIONS.len());

        let expected: InstanceRaw = scene::lamp_model_matrix(scene::POINT_LIGHT_POSITIONS[0]).into();
        assert_eq!(bytemuck::bytes_of(&lamps[0]), bytemuck::bytes_of(&expected));

        let first: InstanceRaw = Mat4::from_translation(scene::CUBE_POSITIONS[0]).into();
        assert_eq!(bytemuck::bytes_of(&cubes[0]), bytemuck::bytes_of(&first));
    }

    #[test]
    fn test_camera_uniform() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 4.0 / 3.0);
        let uniform = CameraUniform::from_camera(&camera);

        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.projection, camera.projection_matrix().to_cols_array_2d());
        assert_eq!(uniform.view_pos, [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_lights_uniform() {
        let mut lighting = SceneLighting::default();
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        camera.set_yaw(0.0);
        lighting.follow_camera(&camera);

        let uniform = LightsUniform::from(&lighting);

        assert_eq!(uniform.material[0], 32.0);
        assert_eq!(uniform.dir_light.direction, [-0.2, -1.0, -0.3, 0.0]);
        assert_eq!(uniform.point_lights[1].position, [2.3, -3.3, -4.0, 0.0]);
        assert_eq!(uniform.point_lights[3].attenuation, [1.0, 0.14, 0.07, 0.0]);
        assert_eq!(uniform.spot_light.position, [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(uniform.spot_light.direction, camera.front().extend(0.0).to_array());
        assert!(uniform.spot_light.cut_off[0] > uniform.spot_light.cut_off[1]);
    }

    #[test]
    fn test_checkerboard() {
        let color = [200, 140, 60, 255];
        let image = checkerboard(64, 8, color);

        assert_eq!(image.dimensions(), (64, 64));
        assert_eq!(image.get_pixel(0, 0).0, color);
        assert_eq!(image.get_pixel(8, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(8, 8).0, color);
        assert_eq!(image.get_pixel(63, 0).0, [0, 0, 0, 255]);
    }

    /// Any adapter will do, including a software one; `None` when the
    /// machine has no GPU backend at all.
    fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .ok()?;

        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Test Device"),
            ..Default::default()
        }))
        .ok()
    }

    fn empty_layout(device: &wgpu::Device) -> wgpu::PipelineLayout {
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Empty Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        })
    }

    #[test]
    fn test_scene_shaders_validate() {
        let Some((device, _queue)) = headless_device() else {
            eprintln!("No GPU adapter available, skipping");
            return;
        };

        for (label, source) in [("Lighting Shader", LIGHTING_SHADER), ("Lamp Shader", LAMP_SHADER)] {
            device.push_error_scope(wgpu::ErrorFilter::Validation);
            let _module = create_shader_module(&device, label, source);
            let error = pollster::block_on(device.pop_error_scope());
            assert!(error.is_none(), "{label}: {error:?}");
        }
    }

    #[test]
    fn test_broken_shader_is_logged_not_fatal() {
        let Some((device, _queue)) = headless_device() else {
            eprintln!("No GPU adapter available, skipping");
            return;
        };

        log_uncaptured_errors(&device);

        // Both the module and the pipeline built from it fail validation
        // inside their own scopes; neither reaches the default panic handler.
        let module = create_shader_module(&device, "Broken Shader", "fn vs_main( {");
        let layout = empty_layout(&device);
        let _pipeline = create_pipeline(
            &device,
            "Broken Pipeline",
            &layout,
            &module,
            Vertex::layout(),
            wgpu::TextureFormat::Rgba8UnormSrgb,
        );

        // Outside any scope, errors go to the logging handler.
        let _buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Invalid Usage Buffer"),
            size: 16,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::VERTEX,
            mapped_at_creation: false,
        });
    }
}
