//! Desktop front-end: the same configurator core behind a winit window,
//! with keyboard parameter edits instead of the web panel.
//!
//! Usage: `frame-native [path/to/BaseFrame.glb]`. Without a path the
//! procedural base frame is used.
//!
//! Keys: Left/Right adjust common width, Up/Down common height, 1-4 toggle
//! a corner between Corner and Chamfer, -/= shrink or grow the chamfer legs
//! of every chamfered corner. Drag to orbit, wheel to zoom.

use fnv::FnvHashMap;
use frame_core::asset::{assembly_from_glb, procedural_assembly};
use frame_core::constants::BACKGROUND_COLOR;
use frame_core::{
    Configurator, CornerId, CornerKind, DrawItem, DrawKey, OrbitCamera, SCENE_WGSL,
};
use glam::{Mat4, Vec3};
use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

const LIGHT_DIR: Vec3 = Vec3::new(-0.55, 0.7, 0.45);
const COMMON_STEP_MM: f32 = 25.0;
const LEG_STEP_MM: f32 = 25.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PartUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    revision: u32,
    part_uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    part_layout: wgpu::BindGroupLayout,
    depth_view: wgpu::TextureView,
    meshes: FnvHashMap<DrawKey, GpuMesh>,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals layout"),
            entries: &[uniform_entry(0)],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals bind group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let part_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("part layout"),
            entries: &[uniform_entry(0)],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline layout"),
            bind_group_layouts: &[&globals_layout, &part_layout],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth24Plus,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let depth_view = create_depth_view(&device, config.width, config.height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            globals_bind_group,
            part_layout,
            depth_view,
            meshes: FnvHashMap::default(),
        })
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, size.width, size.height);
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    fn render(
        &mut self,
        items: &[DrawItem<'_>],
        view_proj: Mat4,
    ) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                view_proj: view_proj.to_cols_array_2d(),
                light_dir: [LIGHT_DIR.x, LIGHT_DIR.y, LIGHT_DIR.z, 0.0],
            }),
        );

        self.meshes
            .retain(|key, _| items.iter().any(|item| item.key == *key));
        for item in items {
            let stale = match self.meshes.get(&item.key) {
                Some(entry) => entry.revision != item.mesh_revision,
                None => true,
            };
            if stale {
                let entry = upload_mesh(&self.device, &self.part_layout, item);
                self.meshes.insert(item.key, entry);
            }
            let entry = &self.meshes[&item.key];
            self.queue.write_buffer(
                &entry.part_uniform,
                0,
                bytemuck::bytes_of(&PartUniform {
                    model: item.model.to_cols_array_2d(),
                    color: item.color,
                }),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND_COLOR[0] as f64,
                            g: BACKGROUND_COLOR[1] as f64,
                            b: BACKGROUND_COLOR[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for item in items {
                let entry = &self.meshes[&item.key];
                rpass.set_bind_group(1, &entry.bind_group, &[]);
                rpass.set_vertex_buffer(0, entry.vertex_buffer.slice(..));
                rpass.set_index_buffer(entry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..entry.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth24Plus,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn upload_mesh(
    device: &wgpu::Device,
    part_layout: &wgpu::BindGroupLayout,
    item: &DrawItem<'_>,
) -> GpuMesh {
    let vertices: Vec<Vertex> = item
        .mesh
        .positions
        .iter()
        .zip(item.mesh.normals.iter())
        .map(|(p, n)| Vertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("part vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("part indices"),
        contents: bytemuck::cast_slice(&item.mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let part_uniform = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("part uniform"),
        size: std::mem::size_of::<PartUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("part bind group"),
        layout: part_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: part_uniform.as_entire_binding(),
        }],
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: item.mesh.indices.len() as u32,
        revision: item.mesh_revision,
        part_uniform,
        bind_group,
    }
}

fn toggle_corner(configurator: &mut Configurator, id: CornerId) {
    let next = match configurator.params.corner(id).kind {
        CornerKind::Chamfer => CornerKind::Corner,
        _ => CornerKind::Chamfer,
    };
    log::info!("{} corner -> {next}", id.label());
    configurator.set_corner_kind(id, next);
}

fn nudge_legs(configurator: &mut Configurator, delta_mm: f32) {
    for id in CornerId::ALL {
        let cp = *configurator.params.corner(id);
        if cp.kind != CornerKind::Chamfer {
            continue;
        }
        configurator.set_corner_width_mm(id, cp.width_mm + delta_mm);
        configurator.set_corner_height_mm(id, cp.height_mm + delta_mm);
    }
}

fn handle_key(configurator: &mut Configurator, key: &Key) {
    match key {
        Key::Named(NamedKey::ArrowLeft) => {
            let mm = configurator.params.common_width_mm - COMMON_STEP_MM;
            configurator.set_common_width_mm(mm);
        }
        Key::Named(NamedKey::ArrowRight) => {
            let mm = configurator.params.common_width_mm + COMMON_STEP_MM;
            configurator.set_common_width_mm(mm);
        }
        Key::Named(NamedKey::ArrowDown) => {
            let mm = configurator.params.common_height_mm - COMMON_STEP_MM;
            configurator.set_common_height_mm(mm);
        }
        Key::Named(NamedKey::ArrowUp) => {
            let mm = configurator.params.common_height_mm + COMMON_STEP_MM;
            configurator.set_common_height_mm(mm);
        }
        Key::Character(c) => match c.as_str() {
            "1" => toggle_corner(configurator, CornerId::TopLeft),
            "2" => toggle_corner(configurator, CornerId::TopRight),
            "3" => toggle_corner(configurator, CornerId::BottomLeft),
            "4" => toggle_corner(configurator, CornerId::BottomRight),
            "-" => nudge_legs(configurator, -LEG_STEP_MM),
            "=" => nudge_legs(configurator, LEG_STEP_MM),
            _ => {}
        },
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let assembly = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            log::info!("loading base frame from {path}");
            assembly_from_glb(&bytes)?
        }
        None => procedural_assembly()?,
    };

    let mut configurator = Configurator::new();
    configurator.install_assembly(assembly);
    let mut camera = OrbitCamera::default();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Frame Configurator (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut last_frame = Instant::now();
    let mut dragging = false;
    let mut last_cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event, .. },
            ..
        } => {
            if event.state == ElementState::Pressed {
                handle_key(&mut configurator, &event.logical_key);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::MouseInput { state: button_state, button: MouseButton::Left, .. },
            ..
        } => {
            dragging = button_state == ElementState::Pressed;
            if !dragging {
                last_cursor = None;
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            if dragging {
                if let Some((lx, ly)) = last_cursor {
                    camera.orbit((position.x - lx) as f32, (position.y - ly) as f32);
                }
            }
            last_cursor = Some((position.x, position.y));
        }
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => {
            let steps = match delta {
                MouseScrollDelta::LineDelta(_, y) => -y,
                MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32) / 60.0,
            };
            camera.zoom(steps);
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = now - last_frame;
            last_frame = now;
            camera.update(dt.as_secs_f32());

            let view_proj = camera.view_proj(state.aspect());
            let items = configurator.draw_items();
            match state.render(&items, view_proj) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => {
                    let size = state.window.inner_size();
                    state.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
