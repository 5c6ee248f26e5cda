// Game modules: the lander round and the plain scene

pub mod lander;
pub mod scene;
pub mod world;
