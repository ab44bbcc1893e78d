//! The built-in audience catalog.

/// Audience names placed on the orbits, in placement order.
#[rustfmt::skip]
pub const AUDIENCES: &[&str] = &[
    "CREATORS", "YOUTUBERS", "PODCASTERS", "STREAMERS", "VLOGGERS",
    "INFLUENCERS", "TIKTOKERS", "INSTAGRAMMERS", "BLOGGERS", "WRITERS",
    "ARTISTS", "PHOTOGRAPHERS", "VIDEOGRAPHERS", "MUSICIANS", "SINGERS",
    "DANCERS", "PERFORMERS", "ENTERTAINERS", "COMEDIANS", "STORYTELLERS",
    "EDUCATORS", "COACHES", "TRAINERS", "MENTORS", "TEACHERS",
    "ATHLETES", "GAMERS", "REVIEWERS", "CRITICS", "COMMENTATORS",
    "CHEFS", "FOODIES", "TRAVELERS", "ADVENTURERS", "EXPLORERS",
    "LIFESTYLE", "FASHIONISTAS", "BEAUTY", "MAKEUP", "STYLISTS",
    "FITNESS", "YOGIS", "RUNNERS", "CYCLISTS", "CLIMBERS",
    "CRAFTERS", "MAKERS", "BUILDERS", "GARDENERS", "DECORATORS",
    "BOOKWORMS", "READERS", "POETS", "NOVELISTS", "JOURNALISTS",
    "HISTORIANS", "SCIENTISTS", "RESEARCHERS", "INVENTORS", "THINKERS",
    "PHILOSOPHERS", "MOTIVATORS", "SPEAKERS", "HOSTS", "PRESENTERS",
    "INTERVIEWERS", "ANCHORS", "REPORTERS", "CORRESPONDENTS", "CRITICS",
    "COLLECTORS", "HOBBYISTS", "ENTHUSIASTS", "FANS", "SUPPORTERS",
    "SKATERS", "SURFERS", "SNOWBOARDERS", "HIKERS", "CAMPERS",
    "FISHERS", "HUNTERS", "BIKERS", "MOTORCYCLISTS", "DRIVERS",
    "PILOTS", "SAILORS", "DIVERS", "SWIMMERS", "WALKERS",
    "PAINTERS", "SCULPTORS", "ILLUSTRATORS", "DESIGNERS", "ANIMATORS",
    "CARTOONISTS", "SKETCHERS", "DRAWERS", "CALLIGRAPHERS", "TATTOOISTS",
    "BAKERS", "COOKS", "BARISTAS", "MIXOLOGISTS", "SOMMELIERS",
    "WINE LOVERS", "BEER LOVERS", "COFFEE LOVERS", "TEA LOVERS", "FOOD LOVERS",
    "PET LOVERS", "DOG LOVERS", "CAT LOVERS", "BIRD LOVERS", "FISH KEEPERS",
    "PLANT LOVERS", "FLOWER LOVERS", "TREE HUGGERS", "NATURE LOVERS", "ECO WARRIORS",
    "MINIMALISTS", "MAXIMALISTS", "ORGANIZERS", "CLEANERS", "TIDIERS",
    "KNITTERS", "SEWERS", "QUILTERS", "EMBROIDERERS", "WEAVERS",
    "WOODWORKERS", "METALWORKERS", "JEWELERS", "POTTERS", "GLASSBLOWERS",
    "MAGICIANS", "JUGGLERS", "ACROBATS", "MIMES", "CLOWNS",
    "VOICE ACTORS", "NARRATORS", "AUDIOBOOK READERS", "RADIO HOSTS", "DJS",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_case() {
        assert_eq!(AUDIENCES.len(), 150);
        assert!(AUDIENCES.iter().all(|a| a.to_uppercase() == *a));
    }
}
