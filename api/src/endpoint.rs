use std::fmt;

/// Fixed REST resources exposed by the content service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    HeroImages,
    HeroVideos,
    ClinicInfo,
    Features,
    Team,
    TeamPictures,
    Feedback,
    Faqs,
    Partners,
    Services,
    Blogs,
    Results,
    /// Liveness probe; answers with a bare status.
    TestConnection,
}

impl Endpoint {
    pub const ALL: [Endpoint; 13] = [
        Endpoint::HeroImages,
        Endpoint::HeroVideos,
        Endpoint::ClinicInfo,
        Endpoint::Features,
        Endpoint::Team,
        Endpoint::TeamPictures,
        Endpoint::Feedback,
        Endpoint::Faqs,
        Endpoint::Partners,
        Endpoint::Services,
        Endpoint::Blogs,
        Endpoint::Results,
        Endpoint::TestConnection,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::HeroImages => "/api/hero-images",
            Endpoint::HeroVideos => "/api/hero-videos",
            Endpoint::ClinicInfo => "/api/clinic-info",
            Endpoint::Features => "/api/features",
            Endpoint::Team => "/api/team",
            Endpoint::TeamPictures => "/api/team-pictures",
            Endpoint::Feedback => "/api/feedback",
            Endpoint::Faqs => "/api/faqs",
            Endpoint::Partners => "/api/partners",
            Endpoint::Services => "/api/services",
            Endpoint::Blogs => "/api/blogs",
            Endpoint::Results => "/api/results",
            Endpoint::TestConnection => "/api/test-connection",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_and_rooted() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
        assert!(paths.iter().all(|p| p.starts_with("/api/")));
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Endpoint::Team.to_string(), "/api/team");
    }
}
