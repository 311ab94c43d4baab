use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS scriptures (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            book         TEXT NOT NULL,
            chapter      INTEGER NOT NULL,
            verse_start  INTEGER NOT NULL,
            verse_end    INTEGER,
            text         TEXT NOT NULL,
            active       INTEGER DEFAULT 1,
            UNIQUE(book, chapter, verse_start)
        );

        CREATE TABLE IF NOT EXISTS guess_log (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            scripture_id INTEGER NOT NULL REFERENCES scriptures(id),
            date         TEXT NOT NULL,
            difficulty   TEXT NOT NULL CHECK(difficulty IN ('easy','medium','hard')),
            guess        TEXT NOT NULL,
            correct      INTEGER NOT NULL DEFAULT 0,
            is_daily     INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_guess_log_date ON guess_log(date);

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ")?;

    seed_corpus(conn)?;
    Ok(())
}

/// The 25 Book of Mormon scripture-mastery passages. Excerpts are trimmed
/// to the memorable core so the prompt fits a terminal.
fn seed_corpus(conn: &Connection) -> Result<()> {
    let passages: &[(&str, u32, u32, Option<u32>, &str)] = &[
        ("1 Nephi", 3, 7, None,
         "I will go and do the things which the Lord hath commanded, for I know that the Lord giveth no commandments unto the children of men, save he shall prepare a way for them."),
        ("1 Nephi", 19, 23, None,
         "I did liken all scriptures unto us, that it might be for our profit and learning."),
        ("2 Nephi", 2, 25, None,
         "Adam fell that men might be; and men are, that they might have joy."),
        ("2 Nephi", 2, 27, None,
         "They are free to choose liberty and eternal life, through the great Mediator of all men, or to choose captivity and death."),
        ("2 Nephi", 9, 28, Some(29),
         "When they are learned they think they are wise, and they hearken not unto the counsel of God. But to be learned is good if they hearken unto the counsels of God."),
        ("2 Nephi", 28, 7, Some(9),
         "Eat, drink, and be merry, for tomorrow we die; and it shall be well with us."),
        ("2 Nephi", 32, 3, None,
         "Feast upon the words of Christ; for behold, the words of Christ will tell you all things what ye should do."),
        ("2 Nephi", 32, 8, Some(9),
         "Ye must pray always, and not faint; ye must not perform any thing unto the Lord save in the first place ye shall pray unto the Father in the name of Christ."),
        ("Jacob", 2, 18, Some(19),
         "Before ye seek for riches, seek ye for the kingdom of God."),
        ("Mosiah", 2, 17, None,
         "When ye are in the service of your fellow beings ye are only in the service of your God."),
        ("Mosiah", 3, 19, None,
         "The natural man is an enemy to God, and has been from the fall of Adam, and will be, forever and ever, unless he yields to the enticings of the Holy Spirit."),
        ("Mosiah", 4, 30, None,
         "Watch yourselves, and your thoughts, and your words, and your deeds, and observe the commandments of God."),
        ("Alma", 32, 21, None,
         "Faith is not to have a perfect knowledge of things; therefore if ye have faith ye hope for things which are not seen, which are true."),
        ("Alma", 34, 32, Some(34),
         "This life is the time for men to prepare to meet God; yea, behold the day of this life is the day for men to perform their labors."),
        ("Alma", 37, 6, Some(7),
         "By small and simple things are great things brought to pass."),
        ("Alma", 37, 35, None,
         "Learn wisdom in thy youth; yea, learn in thy youth to keep the commandments of God."),
        ("Alma", 41, 10, None,
         "Behold, I say unto you, wickedness never was happiness."),
        ("Helaman", 5, 12, None,
         "It is upon the rock of our Redeemer, who is Christ, the Son of God, that ye must build your foundation."),
        ("3 Nephi", 11, 29, None,
         "He that hath the spirit of contention is not of me, but is of the devil, who is the father of contention."),
        ("3 Nephi", 27, 27, None,
         "What manner of men ought ye to be? Verily I say unto you, even as I am."),
        ("Ether", 12, 6, None,
         "Dispute not because ye see not, for ye receive no witness until after the trial of your faith."),
        ("Ether", 12, 27, None,
         "If men come unto me I will show unto them their weakness; then will I make weak things become strong unto them."),
        ("Moroni", 7, 16, Some(17),
         "The Spirit of Christ is given to every man, that he may know good from evil."),
        ("Moroni", 7, 45, None,
         "Charity suffereth long, and is kind, and envieth not, and is not puffed up."),
        ("Moroni", 10, 4, Some(5),
         "Ask God, the Eternal Father, in the name of Christ, if these things are not true; and by the power of the Holy Ghost ye may know the truth of all things."),
    ];

    for (book, chapter, verse_start, verse_end, text) in passages {
        conn.execute(
            "INSERT OR IGNORE INTO scriptures (book, chapter, verse_start, verse_end, text, active)
             VALUES (?1, ?2, ?3, ?4, ?5, 1)",
            rusqlite::params![book, chapter, verse_start, verse_end, text],
        )?;
    }
    Ok(())
}
