//! Static catalog shown when the popular-movies listing cannot be fetched.
use once_cell::sync::Lazy;

use crate::models::{Genre, Movie};

static CATALOG: Lazy<Vec<Movie>> = Lazy::new(|| {
    vec![
        entry(
            1,
            "Начало",
            "Кобб – талантливый вор, лучший из лучших в опасном искусстве извлечения: он крадет ценные секреты из глубин подсознания во время сна, когда человеческий разум наиболее уязвим.",
            "Inception",
            "2010-07-16",
            8.4,
            &["Фантастика", "Боевик", "Триллер"],
            (148, 160_000_000, 836_800_000),
        ),
        entry(
            2,
            "Интерстеллар",
            "Наше время на Земле подошло к концу, команда исследователей берет на себя самую важную миссию в истории человечества; путешествуя за пределами нашей галактики, чтобы узнать есть ли у человечества будущее среди звезд.",
            "Interstellar",
            "2014-11-07",
            8.6,
            &["Фантастика", "Драма", "Приключения"],
            (169, 165_000_000, 677_500_000),
        ),
        entry(
            3,
            "Темный рыцарь",
            "С помощью лейтенанта Джима Гордона и нового окружного прокурора Харви Дента Бэтмен намерен уничтожить преступность в Готэме. Но вскоре их объединенные силы подвергаются испытанию появлением Джокера – криминального гения, ставящего перед городом новую угрозу.",
            "The+Dark+Knight",
            "2008-07-18",
            9.0,
            &["Боевик", "Криминал", "Драма"],
            (152, 185_000_000, 1_000_000_000),
        ),
        entry(
            4,
            "Матрица",
            "Компьютерный хакер узнает от таинственных повстанцев о реальном мире, скрытом искусственной действительностью, и о своей роли в войне против контролирующих её машин.",
            "The+Matrix",
            "1999-03-31",
            8.7,
            &["Боевик", "Фантастика"],
            (136, 63_000_000, 465_000_000),
        ),
        entry(
            5,
            "Бойцовский клуб",
            "Страдающий от бессонницы клерк и безжалостный торговец мылом заводят подпольный бойцовский клуб, который развивается в нечто совершенно иное.",
            "Fight+Club",
            "1999-10-15",
            8.8,
            &["Драма", "Триллер"],
            (139, 63_000_000, 100_900_000),
        ),
        entry(
            6,
            "Престиж",
            "После трагического инцидента два фокусника-соперника начинают дикую битву, чтобы создать иллюзию, которая изменит реальность.",
            "The+Prestige",
            "2006-10-20",
            8.5,
            &["Драма", "Мистика", "Триллер"],
            (130, 40_000_000, 109_700_000),
        ),
        entry(
            7,
            "Назад в будущее",
            "Марти МакФлай, подросток из 1985 года, случайно попадает в прошлое, в 1955 год. Там он встречает своих будущих родителей, еще подростков, и случайно нарушает их первую встречу. Теперь он должен удостовериться, что его родители встретятся и влюбятся, иначе он сам перестанет существовать.",
            "Back+to+the+Future",
            "1985-07-03",
            8.5,
            &["Фантастика", "Комедия", "Приключения"],
            (116, 19_000_000, 388_800_000),
        ),
        entry(
            8,
            "Гладиатор",
            "Генерал Максимус, величайший полководец Рима, стал рабом, сражающимся на арене гладиаторов, чтобы отомстить коварному императору Коммоду за убийство своей семьи.",
            "Gladiator",
            "2000-05-05",
            8.5,
            &["Боевик", "Драма", "Приключения"],
            (155, 103_000_000, 460_500_000),
        ),
    ]
});

/// The fixed fallback list. Same values on every call.
pub fn static_catalog() -> Vec<Movie> {
    CATALOG.clone()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: i64,
    title: &str,
    overview: &str,
    poster_label: &str,
    release_date: &str,
    vote_average: f64,
    genres: &[&str],
    (runtime, budget, revenue): (u64, u64, u64),
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        poster: format!("https://via.placeholder.com/500x750?text={poster_label}"),
        release_date: release_date.to_string(),
        vote_average,
        genres: genres.iter().map(|g| Genre::Name(g.to_string())).collect(),
        runtime,
        budget,
        revenue,
    }
}
