use bevy::prelude::*;

#[derive(Component)]
pub struct RestartButton;

/// A resource that can be rebuilt to its initial state by the shared
/// restart button.
pub trait Restartable: Resource {
    fn restart(&mut self);
}

pub fn handle_restart<T: Restartable>(
    mut restartable: ResMut<T>,
    mut interaction_query: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
) {
    for interaction in &mut interaction_query {
        if *interaction == Interaction::Pressed {
            info!("Restart button pressed");
            restartable.restart();
        }
    }
}

/// Spawns the standard restart button in the top-right corner.
pub fn spawn_restart_button(
    commands: &mut Commands,
    size: Vec2,
    margin: f32,
    background: Color,
    label_color: Color,
) {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(margin),
                right: Val::Px(margin),
                width: Val::Px(size.x),
                height: Val::Px(size.y),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor::from(background),
            RestartButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Restart"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(label_color),
            ));
        });
}
