use reporter_core::RepositoryModel;

pub fn init_logging() {
    reporter_logging::initialize_for_tests();
}

pub fn repo_1() -> RepositoryModel {
    RepositoryModel::new(
        "Repo 1",
        "This is the first repo. It has a long descriptive text which spans many lines.",
        5,
        5,
        "Swift",
    )
}

pub fn repo_2() -> RepositoryModel {
    RepositoryModel::new("Repo 2", "This is another repo.", 0, 5, "Python")
}

pub fn repo_3() -> RepositoryModel {
    RepositoryModel::new("Repo 3", "This is the last repo.", 5, 0, "Rust")
}

pub fn samples() -> Vec<RepositoryModel> {
    vec![repo_1(), repo_2(), repo_3()]
}
