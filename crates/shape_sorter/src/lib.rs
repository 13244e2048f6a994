use bevy::prelude::*;
use sorter_helpers::input::{
    just_pressed_world_position, just_released_world_position, pressed_world_position,
};
use sorter_helpers::restart::{handle_restart, spawn_restart_button};
use sorter_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};

use crate::interaction::{handle_pointer, PointerEvent};
use crate::session::{Session, SHAPE_SIZE};
use crate::shapes::{fill_mesh, outline_mesh, OUTLINE_THICKNESS};

pub mod interaction;
pub mod session;
pub mod shapes;

// Original board colors: white table, light gray chrome.
const CHROME_COLOR: Color = Color::srgb(0.78, 0.78, 0.78);

const RESTART_BUTTON_SIZE: Vec2 = Vec2::new(80.0, 40.0);
const RESTART_BUTTON_MARGIN: f32 = 20.0;
const FEEDBACK_FONT_SIZE: f32 = 64.0;

pub fn run() {
    sorter_helpers::get_default_app("Shape Sorting Game")
        .insert_resource(ClearColor(Color::WHITE))
        .init_resource::<Session>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                pointer_input,
                handle_restart::<Session>,
                sync_slot_visuals,
                sync_piece_transforms,
                update_feedback_banner,
            )
                .chain(),
        )
        .run();
}

/// Mirrors one slot of the session. Holds both looks so the entity can flip
/// between them when the slot fills, or back on restart.
#[derive(Component)]
struct SlotVisual {
    index: usize,
    outline: Handle<Mesh>,
    filled: Handle<Mesh>,
    outline_material: Handle<ColorMaterial>,
    shown_filled: bool,
}

/// Mirrors one piece of the session; its transform follows the piece.
#[derive(Component)]
struct PieceVisual {
    index: usize,
}

#[derive(Component)]
struct FeedbackBanner;

/// Session positions are window coordinates with a top-left origin; Bevy's
/// world is centered with y up, and meshes are centered on the box.
fn layout_to_world(pos: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        pos.x + SHAPE_SIZE / 2.0 - WINDOW_WIDTH / 2.0,
        WINDOW_HEIGHT / 2.0 - pos.y - SHAPE_SIZE / 2.0,
        z,
    )
}

fn world_to_layout(world: Vec2) -> Vec2 {
    Vec2::new(world.x + WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - world.y)
}

fn setup(
    mut commands: Commands,
    session: Res<Session>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2d);

    // Slots draw below the pieces so a dragged piece occludes its outline.
    let outline_material = materials.add(ColorMaterial::from(CHROME_COLOR));
    for slot in &session.slots {
        let outline = meshes.add(outline_mesh(slot.kind, SHAPE_SIZE, OUTLINE_THICKNESS));
        let filled = meshes.add(fill_mesh(slot.kind, SHAPE_SIZE));
        commands.spawn((
            Mesh2d(outline.clone()),
            MeshMaterial2d(outline_material.clone()),
            Transform::from_translation(layout_to_world(slot.pos, 0.0)),
            SlotVisual {
                index: slot.index,
                outline,
                filled,
                outline_material: outline_material.clone(),
                shown_filled: false,
            },
        ));
    }

    for (index, piece) in session.pieces.iter().enumerate() {
        commands.spawn((
            Mesh2d(meshes.add(fill_mesh(piece.kind, SHAPE_SIZE))),
            MeshMaterial2d(materials.add(ColorMaterial::from(piece.color))),
            Transform::from_translation(layout_to_world(piece.pos, 1.0)),
            PieceVisual { index },
        ));
    }

    spawn_restart_button(
        &mut commands,
        RESTART_BUTTON_SIZE,
        RESTART_BUTTON_MARGIN,
        CHROME_COLOR,
        Color::BLACK,
    );

    commands.spawn((
        Text::new("CORRECT!"),
        TextFont {
            font_size: FEEDBACK_FONT_SIZE,
            ..default()
        },
        TextColor(Color::BLACK),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(18.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        Visibility::Hidden,
        FeedbackBanner,
    ));
}

/// Folds mouse and touch into the discrete pointer events the controller
/// understands, in layout coordinates.
fn pointer_input(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut session: ResMut<Session>,
) {
    if let Some(position) =
        just_pressed_world_position(&mouse_button_input, &touch_input, &windows, &camera_query)
    {
        handle_pointer(&mut session, PointerEvent::Down(world_to_layout(position)));
    } else if let Some(position) =
        pressed_world_position(&mouse_button_input, &touch_input, &windows, &camera_query)
    {
        handle_pointer(&mut session, PointerEvent::Move(world_to_layout(position)));
    }

    // Checked on its own so a press and release landing in the same frame
    // still ends the drag instead of leaving the piece held.
    if let Some(position) =
        just_released_world_position(&mouse_button_input, &touch_input, &windows, &camera_query)
    {
        handle_pointer(&mut session, PointerEvent::Up(world_to_layout(position)));
    }
}

fn sync_piece_transforms(
    session: Res<Session>,
    mut query: Query<(&PieceVisual, &mut Transform)>,
) {
    for (visual, mut transform) in &mut query {
        let Some(piece) = session.pieces.get(visual.index) else {
            continue;
        };
        // A held piece rides above its resting siblings.
        let z = if piece.is_dragging() { 2.0 } else { 1.0 };
        transform.translation = layout_to_world(piece.pos, z);
    }
}

fn sync_slot_visuals(
    session: Res<Session>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&mut SlotVisual, &mut Mesh2d, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    for (mut visual, mut mesh, mut material) in &mut query {
        let Some(slot) = session.slots.get(visual.index) else {
            continue;
        };
        if slot.filled == visual.shown_filled {
            continue;
        }
        if slot.filled {
            let Some(color) = slot.fill_color else {
                continue;
            };
            info!("Slot {} filled", slot.index);
            mesh.0 = visual.filled.clone();
            material.0 = materials.add(ColorMaterial::from(color));
        } else {
            mesh.0 = visual.outline.clone();
            material.0 = visual.outline_material.clone();
        }
        visual.shown_filled = slot.filled;
    }
}

/// Shows the banner while the countdown runs and burns exactly one frame
/// off it per rendered frame.
fn update_feedback_banner(
    mut session: ResMut<Session>,
    mut query: Query<&mut Visibility, With<FeedbackBanner>>,
) {
    let Ok(mut visibility) = query.get_single_mut() else {
        return;
    };
    *visibility = if session.tick_feedback() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}
