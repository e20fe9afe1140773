//! Tests for the software host

use glam::{Mat4, Vec3, Vec4};
use tint_common::{FEATURE_ALL, FEATURE_NORMALS, FEATURE_VERTEX_COLORS, ShadingKey, VertexInput};
use tint_core::{FragmentOutput, MaterialServices, MeshServices, VertexOutput};

use super::*;
use crate::config::MaterialConfig;
use crate::shading::{FORWARD_DIMMING, fragment_stage, vertex_stage};

fn approx_eq3(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

fn approx_eq4(a: Vec4, b: Vec4, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

fn input_with(material: StandardMaterial) -> PbrInput {
    let varyings = VertexOutput::new(Vec4::W, Vec4::W).with_world_normal(Vec3::Z);
    let view = View {
        world_position: Vec3::new(0.0, 0.0, 5.0),
        ..Default::default()
    };
    PbrInput::new(material, &varyings, &view, true)
}

/// Unlit, opaque, no fog or tone mapping: forward output is the dimmed base color
fn passthrough_host() -> SoftwareHost {
    let mut host = SoftwareHost::new(
        InstanceTable::from_transforms([Mat4::IDENTITY]),
        View::default(),
        StandardMaterial {
            unlit: true,
            ..Default::default()
        },
    );
    host.post.tonemapping = Tonemapping::None;
    host
}

// ============================================================================
// Lighting Input
// ============================================================================

#[test]
fn test_pbr_input_flips_back_face_normal_when_double_sided() {
    let varyings = VertexOutput::new(Vec4::W, Vec4::W).with_world_normal(Vec3::Y);
    let view = View::default();

    let single = StandardMaterial::default();
    let double = StandardMaterial {
        double_sided: true,
        ..Default::default()
    };

    assert_eq!(PbrInput::new(single, &varyings, &view, false).world_normal, Vec3::Y);
    assert_eq!(PbrInput::new(double, &varyings, &view, true).world_normal, Vec3::Y);
    assert_eq!(PbrInput::new(double, &varyings, &view, false).world_normal, Vec3::NEG_Y);
}

#[test]
fn test_pbr_input_without_normal_faces_camera() {
    let varyings = VertexOutput::new(Vec4::W, Vec4::new(0.0, 0.0, 0.0, 1.0));
    let view = View {
        world_position: Vec3::new(3.0, 0.0, 0.0),
        ..Default::default()
    };
    let input = PbrInput::new(StandardMaterial::default(), &varyings, &view, true);
    assert_eq!(input.view_direction, Vec3::X);
    assert_eq!(input.world_normal, Vec3::X);
}

// ============================================================================
// Alpha Discard
// ============================================================================

#[test]
fn test_alpha_modes() {
    let mut host = passthrough_host();
    let color = Vec4::new(0.2, 0.4, 0.6, 0.3);

    host.material.alpha_mode = AlphaMode::Opaque;
    let input = host.assemble_input(&VertexOutput::new(Vec4::W, Vec4::W), true);
    assert_eq!(host.alpha_discard(&input, color), Some(Vec4::new(0.2, 0.4, 0.6, 1.0)));

    host.material.alpha_mode = AlphaMode::Mask(0.5);
    let input = host.assemble_input(&VertexOutput::new(Vec4::W, Vec4::W), true);
    assert_eq!(host.alpha_discard(&input, color), None);
    assert_eq!(
        host.alpha_discard(&input, color.with_w(0.5)),
        Some(color.with_w(1.0))
    );

    for mode in [AlphaMode::Blend, AlphaMode::Premultiplied, AlphaMode::Add] {
        host.material.alpha_mode = mode;
        let input = host.assemble_input(&VertexOutput::new(Vec4::W, Vec4::W), true);
        assert_eq!(host.alpha_discard(&input, color), Some(color));
    }
}

// ============================================================================
// Lighting
// ============================================================================

#[test]
fn test_unlit_returns_base_color() {
    let base_color = Vec4::new(0.3, 0.6, 0.9, 0.5);
    let input = input_with(StandardMaterial {
        base_color,
        unlit: true,
        ..Default::default()
    });
    let lights = Lights {
        ambient: Vec3::ONE,
        directional: vec![DirectionalLight::new(Vec3::NEG_Z, Vec3::ONE, 10.0)],
    };
    assert_eq!(apply_pbr_lighting(&input, &lights), base_color);
}

#[test]
fn test_light_behind_surface_only_ambient() {
    let input = input_with(StandardMaterial::default());
    let ambient_only = Lights {
        ambient: Vec3::splat(0.2),
        directional: Vec::new(),
    };
    let behind = Lights {
        directional: vec![DirectionalLight::new(Vec3::Z, Vec3::ONE, 5.0)],
        ..ambient_only.clone()
    };
    assert_eq!(
        apply_pbr_lighting(&input, &behind),
        apply_pbr_lighting(&input, &ambient_only)
    );
}

#[test]
fn test_facing_light_is_brighter_and_keeps_alpha() {
    let input = input_with(StandardMaterial {
        base_color: Vec4::new(0.8, 0.8, 0.8, 0.25),
        ..Default::default()
    });
    let lights = |direction: Vec3| Lights {
        ambient: Vec3::ZERO,
        directional: vec![DirectionalLight::new(direction, Vec3::ONE, 1.0)],
    };

    let head_on = apply_pbr_lighting(&input, &lights(Vec3::NEG_Z));
    let grazing = apply_pbr_lighting(&input, &lights(Vec3::new(1.0, 0.0, -0.2)));
    assert!(head_on.x > grazing.x);
    assert!(grazing.x > 0.0);
    assert_eq!(head_on.w, 0.25);
}

#[test]
fn test_brdf_terms() {
    // F0 of a 0.5 reflectance dielectric is 4%
    assert!(approx_eq3(specular_f0(Vec3::ONE, 0.0, 0.5), Vec3::splat(0.04), 1e-6));
    // Metals reflect their base color
    assert_eq!(specular_f0(Vec3::new(1.0, 0.5, 0.0), 1.0, 0.5), Vec3::new(1.0, 0.5, 0.0));
    // Fresnel reaches 1 at grazing angles
    assert!(approx_eq3(fresnel_schlick(Vec3::splat(0.04), 0.0), Vec3::ONE, 1e-6));
    assert_eq!(
        perceptual_roughness_to_roughness(0.0),
        MIN_PERCEPTUAL_ROUGHNESS * MIN_PERCEPTUAL_ROUGHNESS
    );
    // A smoother surface has a sharper highlight peak
    assert!(distribution_ggx(0.1, 1.0) > distribution_ggx(0.5, 1.0));
    assert!(visibility_smith_ggx(0.25, 1.0, 1.0) > 0.0);
}

// ============================================================================
// Post-Lighting
// ============================================================================

#[test]
fn test_tonemapping_operators() {
    let color = Vec3::new(1.0, 3.0, 0.0);
    assert_eq!(Tonemapping::None.apply(color), color);
    assert_eq!(Tonemapping::Reinhard.apply(color), Vec3::new(0.5, 0.75, 0.0));

    let mapped = Tonemapping::ReinhardLuminance.apply(color);
    // Hue is preserved: channel ratios survive
    assert!((mapped.y / mapped.x - 3.0).abs() < 1e-5);
    assert!(luminance(mapped) < 1.0);

    let aces = Tonemapping::AcesFitted.apply(Vec3::splat(100.0));
    assert!(aces.max_element() <= 1.0);
    assert_eq!(Tonemapping::AcesFitted.apply(Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn test_fog_factor() {
    let linear = DistanceFog {
        mode: FogMode::Linear,
        color: Vec4::ONE,
        start: 10.0,
        end: 20.0,
        density: 0.0,
    };
    assert_eq!(linear.factor(5.0), 0.0);
    assert_eq!(linear.factor(15.0), 0.5);
    assert_eq!(linear.factor(50.0), 1.0);

    let exponential = DistanceFog {
        mode: FogMode::Exponential,
        density: 0.1,
        ..linear
    };
    assert_eq!(exponential.factor(0.0), 0.0);
    assert!((exponential.factor(10.0) - (1.0 - (-1.0f32).exp())).abs() < 1e-6);
}

#[test]
fn test_post_lighting_fog_and_premultiply() {
    let view = View {
        world_position: Vec3::new(0.0, 0.0, 15.0),
        ..Default::default()
    };
    let post = PostProcessing {
        fog: Some(DistanceFog {
            mode: FogMode::Linear,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            start: 10.0,
            end: 20.0,
            density: 0.0,
        }),
        tonemapping: Tonemapping::None,
    };
    let varyings = VertexOutput::new(Vec4::W, Vec4::W);

    // Distance 15: halfway into the fog
    let opaque = PbrInput::new(StandardMaterial::default(), &varyings, &view, true);
    let out = main_pass_post_lighting(&opaque, Vec4::new(0.0, 0.0, 0.0, 0.5), &post, &view);
    assert!(approx_eq4(out, Vec4::new(0.5, 0.5, 0.5, 0.5), 1e-6));

    let post = PostProcessing {
        fog: None,
        tonemapping: Tonemapping::None,
    };

    let premultiplied = PbrInput::new(
        StandardMaterial {
            alpha_mode: AlphaMode::Premultiplied,
            ..Default::default()
        },
        &varyings,
        &view,
        true,
    );
    let out = main_pass_post_lighting(&premultiplied, Vec4::new(0.8, 0.4, 0.2, 0.5), &post, &view);
    assert!(approx_eq4(out, Vec4::new(0.4, 0.2, 0.1, 0.5), 1e-6));

    let additive = PbrInput {
        material: StandardMaterial {
            alpha_mode: AlphaMode::Add,
            ..Default::default()
        },
        ..premultiplied
    };
    let out = main_pass_post_lighting(&additive, Vec4::new(0.8, 0.4, 0.2, 0.5), &post, &view);
    assert!(approx_eq4(out, Vec4::new(0.4, 0.2, 0.1, 0.0), 1e-6));
}

// ============================================================================
// Deferred Encoding
// ============================================================================

#[test]
fn test_gbuffer_texel_layout() {
    assert_eq!(std::mem::size_of::<GBufferTexel>(), 16);
    let texel = GBufferTexel::default();
    assert_eq!(bytemuck::bytes_of(&texel).len(), 16);
}

#[test]
fn test_gbuffer_encode_decode() {
    let mut input = input_with(StandardMaterial {
        base_color: Vec4::new(1.0, 0.5, 0.0, 1.0),
        perceptual_roughness: 0.75,
        metallic: 1.0,
        emissive: Vec3::new(0.0, 1.0, 0.0),
        double_sided: true,
        ..Default::default()
    });
    input.world_normal = Vec3::new(0.0, 1.0, 1.0).normalize();

    let data = GBufferTexel::encode(&input).decode();
    assert!(approx_eq4(data.base_color, input.material.base_color, 1.0 / 255.0));
    assert!(approx_eq3(data.normal, input.world_normal, 1e-3));
    assert_eq!(data.perceptual_roughness, 0.75);
    assert_eq!(data.metallic, 1.0);
    assert_eq!(data.emissive, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(data.flags, GBUFFER_FLAG_DOUBLE_SIDED | GBUFFER_FLAG_FRONT_FACING);
}

#[test]
fn test_gbuffer_flags_do_not_bleed_into_emissive() {
    let input = input_with(StandardMaterial {
        emissive: Vec3::ONE,
        unlit: true,
        ..Default::default()
    });
    let texel = GBufferTexel::encode(&input);
    assert_eq!(texel.flags(), GBUFFER_FLAG_UNLIT | GBUFFER_FLAG_FRONT_FACING);
    assert_eq!(texel.decode().emissive, Vec3::ONE);
}

// ============================================================================
// Rasterizer Model
// ============================================================================

#[test]
fn test_interpolate_varyings() {
    let corner = |x: f32, color: Vec4| {
        VertexOutput::new(Vec4::new(x, 0.0, 0.0, 1.0), Vec4::new(x, 0.0, 0.0, 1.0))
            .with_world_normal(Vec3::Y)
            .with_color(color)
    };
    let triangle = [
        corner(0.0, Vec4::new(1.0, 0.0, 0.0, 1.0)),
        corner(1.0, Vec4::new(0.0, 1.0, 0.0, 1.0)),
        corner(2.0, Vec4::new(0.0, 0.0, 1.0, 1.0)),
    ];

    assert_eq!(interpolate_varyings(&triangle, Vec3::X), triangle[0]);

    let center = interpolate_varyings(&triangle, Vec3::splat(1.0 / 3.0));
    assert!(approx_eq4(center.world_position, Vec4::new(1.0, 0.0, 0.0, 1.0), 1e-6));
    assert!(approx_eq4(
        center.color().unwrap(),
        Vec4::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0),
        1e-6
    ));
    assert!(approx_eq3(center.world_normal().unwrap(), Vec3::Y, 1e-6));
}

#[test]
fn test_interpolate_drops_partial_fields() {
    let full = VertexOutput::new(Vec4::W, Vec4::W).with_color(Vec4::ONE);
    let bare = VertexOutput::new(Vec4::W, Vec4::W);
    let out = interpolate_varyings(&[full, full, bare], Vec3::splat(1.0 / 3.0));
    assert!(out.color().is_none());
    assert!(out.world_normal().is_none());
}

// ============================================================================
// Software Host End-to-End
// ============================================================================

#[test]
fn test_instance_table() {
    let mut table = InstanceTable::new();
    assert!(table.is_empty());
    let index = table.push(Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)));
    assert_eq!(index, 0);
    assert_eq!(table.len(), 1);
    assert!(table.get(1).is_none());

    let host = SoftwareHost::new(table, View::default(), StandardMaterial::default());
    let normal =
        host.local_to_world_normal(&host.instance_transform(0), Vec3::new(1.0, 1.0, 0.0), 0);
    assert!(approx_eq3(normal, Vec3::new(0.5, 1.0, 0.0).normalize(), 1e-6));
}

#[test]
fn test_vertex_stage_through_view() {
    let view = View::look_at(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        std::f32::consts::FRAC_PI_2,
        1.0,
        0.1,
        100.0,
    );
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
    let host = SoftwareHost::new(
        InstanceTable::from_transforms([Mat4::IDENTITY, model]),
        view,
        StandardMaterial::default(),
    );

    let vertex = VertexInput {
        instance_index: 1,
        position: Vec3::ZERO,
        normal: Vec3::Z,
        ..Default::default()
    };
    let out = vertex_stage(&host, ShadingKey::forward(FEATURE_NORMALS), &vertex);

    assert_eq!(out.world_position, Vec4::new(0.0, 0.0, -1.0, 1.0));
    // On the view axis: centered in NDC, 6 units in front of the camera
    let ndc = out.position / out.position.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!((out.position.w - 6.0).abs() < 1e-5);
    assert_eq!(out.world_normal(), Some(Vec3::Z));
}

#[test]
fn test_forward_output_is_dimmed_vertex_color() {
    let host = passthrough_host();
    let key = ShadingKey::forward(FEATURE_VERTEX_COLORS);
    let vertex = VertexInput {
        color: Vec4::new(0.5, 1.0, 0.25, 0.1),
        ..Default::default()
    };

    let varyings = vertex_stage(&host, key, &vertex);
    let out = fragment_stage(&host, key, &varyings, true);

    // Opaque forces alpha to 1 before lighting, then everything is dimmed
    let expected = Vec4::new(0.5, 1.0, 0.25, 1.0) * FORWARD_DIMMING;
    assert_eq!(out, Some(FragmentOutput::Forward(expected)));
}

#[test]
fn test_prepass_writes_undimmed_vertex_color() {
    let host = passthrough_host();
    let key = ShadingKey::prepass(FEATURE_ALL);
    let vertex = VertexInput {
        normal: Vec3::Y,
        color: Vec4::new(1.0, 0.0, 0.0, 1.0),
        ..Default::default()
    };

    let varyings = vertex_stage(&host, key, &vertex);
    let out = fragment_stage(&host, key, &varyings, true).unwrap();
    let data = out.deferred().unwrap().decode();

    assert_eq!(data.base_color, Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert!(approx_eq3(data.normal, Vec3::Y, 1e-3));
    assert_ne!(data.flags & GBUFFER_FLAG_UNLIT, 0);
}

#[test]
fn test_mask_discards_on_vertex_alpha() {
    let mut host = passthrough_host();
    host.material.alpha_mode = AlphaMode::Mask(0.5);
    let key = ShadingKey::forward(FEATURE_VERTEX_COLORS);

    let transparent = vertex_stage(
        &host,
        key,
        &VertexInput {
            color: Vec4::new(1.0, 1.0, 1.0, 0.2),
            ..Default::default()
        },
    );
    assert_eq!(fragment_stage(&host, key, &transparent, true), None);

    // Without the color flag the opaque material alpha decides
    let key = ShadingKey::forward(0);
    let bare = vertex_stage(&host, key, &VertexInput::default());
    assert!(fragment_stage(&host, key, &bare, true).is_some());
}

#[test]
fn test_host_from_config() {
    let config = MaterialConfig::from_toml_str(
        r#"
[material]
base_color = [0.5, 0.5, 0.5, 1.0]
unlit = true

[lighting]
ambient = [0.0, 0.0, 0.0]
[[lighting.directional]]
direction = [0.0, -1.0, 0.0]

[post]
tonemapping = "none"
"#,
    )
    .unwrap();

    let host = SoftwareHost::from_config(
        &config,
        InstanceTable::from_transforms([Mat4::IDENTITY]),
        View::default(),
    );
    assert!(host.material.unlit);
    assert_eq!(host.lights.ambient, Vec3::ZERO);
    assert_eq!(host.lights.directional.len(), 1);
    assert_eq!(host.post.tonemapping, Tonemapping::None);

    let key = config.shading_key();
    let vertex = VertexInput {
        normal: Vec3::Y,
        color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        ..Default::default()
    };
    let varyings = vertex_stage(&host, key, &vertex);
    let out = fragment_stage(&host, key, &varyings, true).and_then(|o| o.forward_color());
    assert_eq!(out, Some(Vec4::splat(FORWARD_DIMMING)));
}
