pub mod color;
pub mod cv;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use cv::{
    About, CvData, Education, Experience, Language, PersonalInfo, Project, ProjectStatus, Skills,
    Tenure,
};
pub use geometry::{Point, Rect};
pub use ids::LinkUri;
