use wgpu::util::DeviceExt;
use hf_core::camera::Camera;
use hf_core::config::AssetConfig;
use hf_core::scene::{self, SceneLighting};

use crate::mesh::{InstanceRaw, Vertex, CUBE_VERTEX_COUNT, CUBE_VERTICES};
use crate::shader::{create_shader_module, with_validation_scope};
use crate::texture::{self, Texture, DEPTH_FORMAT};
use crate::uniforms::{CameraUniform, LightsUniform};

pub(crate) const LIGHTING_SHADER: &str = include_str!("shaders/lighting.wgsl");
pub(crate) const LAMP_SHADER: &str = include_str!("shaders/lamp.wgsl");

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

/// Draws the textured cubes and the lamp markers.
pub struct SceneRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    lighting_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    cube_instances: wgpu::Buffer,
    lamp_instances: wgpu::Buffer,
    num_cubes: u32,
    num_lamps: u32,
    camera_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    material_bind_group: wgpu::BindGroup,
    depth: Texture,
    pub lighting: SceneLighting,
}

impl SceneRenderer {
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        format: wgpu::TextureFormat,
        size: (u32, u32),
        assets: &AssetConfig,
    ) -> Self {
        let lighting_shader = create_shader_module(&device, "Lighting Shader", LIGHTING_SHADER);
        let lamp_shader = create_shader_module(&device, "Lamp Shader", LAMP_SHADER);

        let lighting = SceneLighting::default();

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Uniform Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lights Uniform Buffer"),
            contents: bytemuck::cast_slice(&[LightsUniform::from(&lighting)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });

        let diffuse = Texture::load_or_fallback(
            &device,
            &queue,
            &assets.diffuse_path(),
            wgpu::TextureFormat::Rgba8UnormSrgb,
            [200, 140, 60, 255],
        );
        let specular = Texture::load_or_fallback(
            &device,
            &queue,
            &assets.specular_path(),
            wgpu::TextureFormat::Rgba8Unorm,
            [255, 255, 255, 255],
        );
        let sampler = texture::create_sampler(&device);

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[
                texture_entry(0),
                texture_entry(1),
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material Bind Group"),
            layout: &material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&specular.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let lighting_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Lighting Pipeline Layout"),
            bind_group_layouts: &[&frame_layout, &material_layout],
            push_constant_ranges: &[],
        });

        let lamp_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Lamp Pipeline Layout"),
            bind_group_layouts: &[&frame_layout],
            push_constant_ranges: &[],
        });

        let lighting_pipeline = create_pipeline(
            &device,
            "Lighting Pipeline",
            &lighting_layout,
            &lighting_shader,
            Vertex::layout(),
            format,
        );

        let lamp_pipeline = create_pipeline(
            &device,
            "Lamp Pipeline",
            &lamp_layout,
            &lamp_shader,
            Vertex::position_layout(),
            format,
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let cubes = cube_instances();
        let cube_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Instance Buffer"),
            contents: bytemuck::cast_slice(&cubes),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let lamps = lamp_instances();
        let lamp_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lamp Instance Buffer"),
            contents: bytemuck::cast_slice(&lamps),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let depth = Texture::create_depth(&device, size.0, size.1);

        Self {
            device,
            queue,
            lighting_pipeline,
            lamp_pipeline,
            vertex_buffer,
            cube_instances,
            lamp_instances,
            num_cubes: cubes.len() as u32,
            num_lamps: lamps.len() as u32,
            camera_buffer,
            lights_buffer,
            frame_bind_group,
            material_bind_group,
            depth,
            lighting,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.depth = Texture::create_depth(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        camera: &Camera,
    ) {
        self.lighting.follow_camera(camera);

        let camera_uniform = CameraUniform::from_camera(camera);
        let lights_uniform = LightsUniform::from(&self.lighting);
        self.queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera_uniform]));
        self.queue.write_buffer(&self.lights_buffer, 0, bytemuck::cast_slice(&[lights_uniform]));

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        render_pass.set_pipeline(&self.lighting_pipeline);
        render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
        render_pass.set_bind_group(1, &self.material_bind_group, &[]);
        render_pass.set_vertex_buffer(1, self.cube_instances.slice(..));
        render_pass.draw(0..CUBE_VERTEX_COUNT, 0..self.num_cubes);

        render_pass.set_pipeline(&self.lamp_pipeline);
        render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
        render_pass.set_vertex_buffer(1, self.lamp_instances.slice(..));
        render_pass.draw(0..CUBE_VERTEX_COUNT, 0..self.num_lamps);
    }
}

pub fn cube_instances() -> Vec<InstanceRaw> {
    scene::CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, position)| scene::cube_model_matrix(i, *position).into())
        .collect()
}

pub fn lamp_instances() -> Vec<InstanceRaw> {
    scene::POINT_LIGHT_POSITIONS
        .iter()
        .map(|position| scene::lamp_model_matrix(*position).into())
        .collect()
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'static>,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    with_validation_scope(device, &format!("pipeline '{}'", label), || {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout, InstanceRaw::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    })
}
