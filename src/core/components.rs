use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct MainDirectionalLight;

#[derive(Component)]
pub struct Globe;

// Marks entities registered through the render surface (gradient and flow lines).
#[derive(Component)]
pub struct ArcPrimitive;
