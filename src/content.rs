use crate::carousel::ProjectId;

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub nickname: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub photo: &'static str,
    pub focus: &'static str,
    pub highlights: &'static [&'static str],
}

impl Profile {
    /// Name shown in the hero and the brand, "Anas" for "Muhammad Anas Hakimi".
    pub fn short_name(&self) -> &'static str {
        self.name.split(' ').nth(1).unwrap_or(self.name)
    }

    pub fn github_handle(&self) -> &'static str {
        self.github.rsplit('/').next().unwrap_or(self.github)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub images: &'static [&'static str],
    pub preview: &'static str,
    pub github: &'static str,
    pub featured: bool,
}

impl Project {
    pub fn has_link(url: &str) -> bool {
        !url.is_empty() && url != "#"
    }
}

pub static PROFILE: Profile = Profile {
    name: "Muhammad Anas Hakimi",
    nickname: "Kimi",
    tagline: "Tech Enthusiast & Creative Developer",
    bio: "Former UiTM Jasin, Melaka, Bachelor in Computer Science (Hons) Multimedia Computing. Currently doing internship at SSM (Suruhanjaya Syarikat Malaysia). Passionate about creating engaging digital experiences.",
    email: "hakimi11102@gmail.com",
    github: "https://github.com/AnasHakimi",
    linkedin: "https://www.linkedin.com/in/anashakimi/",
    photo: "/profile.png",
    focus: "Frontend • Mobile • Game Dev",
    highlights: &["React", "Kotlin", "Unity"],
};

pub static SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        name: "Frontend",
        items: &["Css", "React", "TypeScript", "Tailwind"],
    },
    SkillGroup {
        name: "Mobile & Web Dev",
        items: &["Kotlin", "JavaEE", "Xampp", "PhpMyAdmin", "Html"],
    },
    SkillGroup {
        name: "Game Dev",
        items: &["Unity", "Construct 3", "AR/VR", "Vuforia", "C#"],
    },
    SkillGroup {
        name: "Tools",
        items: &["Blender", "Figma", "Adobe Illustrator", "Canva"],
    },
];

const CAR_RENTAL: &str = "https://github.com/AnasHakimi/Car_Rental";
const PACKAGE_TRACKING: &str = "https://github.com/AnasHakimi/Package_Tracking";
const SHOPPING_SIM: &str = "https://github.com/AnasHakimi/Shopping_Simulation";

const CAR_RENTAL_SHOT: &str = "https://github.com/AnasHakimi/Car_Rental/raw/master/Preview/Login.png";
const PACKAGE_TRACKING_SHOT: &str =
    "https://github.com/AnasHakimi/Package_Tracking/raw/main/PackageTracking/AIO%20package%20tracking/login.png";
const SHOPPING_SIM_SHOT: &str = "https://github.com/AnasHakimi/Shopping_Simulation/raw/main/Preview/2.png";
// shown until a project has screenshots of its own
const PLACEHOLDER_SHOT: &str = "https://placehold.co/800x450/1e1b4b/e0e7ff?text=Screenshots+coming+soon";

pub static PROJECTS: [Project; 8] = [
    Project {
        id: ProjectId(1),
        title: "SSM CSI Intelligence Assistant",
        description: "My final year project at university was developed using Unity and Vuforia, with the modeling done in Blender. ",
        tech: &["Unity", "Vuforia", "Blender", "Adobe Illustrator"],
        images: &[PLACEHOLDER_SHOT],
        preview: "#",
        github: "#",
        featured: true,
    },
    Project {
        id: ProjectId(2),
        title: "Waste Recycling AR Educational Game",
        description: "My final year project at university was developed using Unity and Vuforia, with the modeling done in Blender. ",
        tech: &["Unity", "Vuforia", "Blender", "Adobe Illustrator"],
        images: &[PLACEHOLDER_SHOT],
        preview: "#",
        github: "#",
        featured: true,
    },
    Project {
        id: ProjectId(3),
        title: "Kitchenware Classification System",
        description: "In Semester 4, my group project for the subject Mobile Programming (CSC557) required us to build a car rental app using Android Studio. ",
        tech: &["Kotlin", "Android Studio", "Prostige", "Canva"],
        images: &[CAR_RENTAL_SHOT],
        preview: CAR_RENTAL_SHOT,
        github: CAR_RENTAL,
        featured: false,
    },
    Project {
        id: ProjectId(4),
        title: "Food Preference Analysis System",
        description: "In Semester 4, my group project for the subject Enterprise Programming (CSC584) was developed using Eclipse IDE and XAMPP, with the real-time API integrated from www.tracking.my.",
        tech: &["Eclipse IDE", "Apache Tomcat", "phpMyAdmin", "Java"],
        images: &[PACKAGE_TRACKING_SHOT],
        preview: PACKAGE_TRACKING_SHOT,
        github: PACKAGE_TRACKING,
        featured: false,
    },
    Project {
        id: ProjectId(5),
        title: "Virtual Shopping Simulation 3D Game using Unity",
        description: "In Semester 5, my group project for the subject Virtual Reality (CSC573) was a virtual shopping mini-game featuring an interactive UI/UX. ",
        tech: &["Unity", "C#", "Blender", "Canva"],
        images: &[SHOPPING_SIM_SHOT],
        preview: SHOPPING_SIM_SHOT,
        github: SHOPPING_SIM,
        featured: false,
    },
    Project {
        id: ProjectId(6),
        title: "Car Rental Mobile Application",
        description: "In Semester 4, my group project for the subject Mobile Programming (CSC557) required us to build a car rental app using Android Studio. ",
        tech: &["Kotlin", "Android Studio", "Prostige", "Canva"],
        images: &[CAR_RENTAL_SHOT],
        preview: CAR_RENTAL_SHOT,
        github: CAR_RENTAL,
        featured: false,
    },
    Project {
        id: ProjectId(7),
        title: "Courier Management System",
        description: "In Semester 4, my group project for the subject Enterprise Programming (CSC584) was developed using Eclipse IDE and XAMPP, with the real-time API integrated from www.tracking.my.",
        tech: &["Eclipse IDE", "Apache Tomcat", "phpMyAdmin", "Java"],
        images: &[PACKAGE_TRACKING_SHOT],
        preview: PACKAGE_TRACKING_SHOT,
        github: PACKAGE_TRACKING,
        featured: false,
    },
    Project {
        id: ProjectId(8),
        title: "Sneakers.Co Ecommerse Website",
        description: "In Semester 4, my group project for the subject Enterprise Programming (CSC584) was developed using Eclipse IDE and XAMPP, with the real-time API integrated from www.tracking.my.",
        tech: &["Eclipse IDE", "Apache Tomcat", "phpMyAdmin", "Java"],
        images: &[PACKAGE_TRACKING_SHOT],
        preview: PACKAGE_TRACKING_SHOT,
        github: PACKAGE_TRACKING,
        featured: false,
    },
];
