//! Cache key builders.
//!
//! Keys are built from a resource tag plus every parameter that changes the
//! result, so each distinct page/limit pair gets its own entry.

use crate::pagination::PageRequest;

pub const ALL_HEROES: &str = "heroes:all";

pub fn hero(id: u32) -> String {
    format!("hero:{id}")
}

pub fn benchmark(hero_id: u32) -> String {
    format!("benchmark:{hero_id}")
}

pub fn pro_players(page: PageRequest) -> String {
    format!("proPlayers:limit={}:page={}", page.limit(), page.page())
}

pub fn teams(page: PageRequest) -> String {
    format!("proTeams:allTeams:limit={}:page={}", page.limit(), page.page())
}

pub fn teams_favorite_hero(page: PageRequest) -> String {
    format!(
        "proTeams:favoriteHero:limit={}:page={}",
        page.limit(),
        page.page()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_deterministic() {
        let page = PageRequest::new(2, 10).unwrap();
        assert_eq!(teams(page), teams(PageRequest::new(2, 10).unwrap()));
        assert_eq!(teams(page), "proTeams:allTeams:limit=10:page=2");
    }

    #[test]
    fn test_distinct_pages_get_distinct_keys() {
        let a = PageRequest::new(1, 10).unwrap();
        let b = PageRequest::new(2, 5).unwrap();
        assert_ne!(pro_players(a), pro_players(b));
        assert_ne!(teams(a), teams_favorite_hero(a));
    }
}
