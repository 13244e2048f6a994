use bevy::prelude::*;

fn cursor_screen_position(windows: &Query<&Window>) -> Option<Vec2> {
    windows.single().cursor_position()
}

fn screen_to_world(
    position: Vec2,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let (camera, camera_transform) = camera.single();

    camera
        .viewport_to_world(camera_transform, position)
        .map(|ray| ray.origin.truncate())
        .ok()
}

/// World position of a press that started this frame, from mouse or touch.
pub fn just_pressed_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = if button_input.just_pressed(MouseButton::Left) {
        cursor_screen_position(windows)?
    } else if touch_input.any_just_pressed() {
        touch_input.iter_just_pressed().next()?.position()
    } else {
        return None;
    };

    screen_to_world(position, camera)
}

/// World position of an ongoing press (button or touch currently held).
pub fn pressed_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = if button_input.pressed(MouseButton::Left) {
        cursor_screen_position(windows)?
    } else if let Some(touch) = touch_input.iter().next() {
        touch.position()
    } else {
        return None;
    };

    screen_to_world(position, camera)
}

/// World position of a press that was released this frame.
pub fn just_released_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = if button_input.just_released(MouseButton::Left) {
        cursor_screen_position(windows)?
    } else if touch_input.any_just_released() {
        touch_input.iter_just_released().next()?.position()
    } else {
        return None;
    };

    screen_to_world(position, camera)
}
