use crate::models::PostWithAuthor;
use rusqlite::{params, Connection, Error as RusqliteError};

/// Inserts a post for the given user and returns the new row id.
pub fn create_post(
    conn: &Connection,
    user_id: i32,
    content: &str,
    image: Option<&str>,
) -> Result<i32, RusqliteError> {
    conn.execute(
        "INSERT INTO posts (user_id, content, image) VALUES (?1, ?2, ?3)",
        params![user_id, content, image],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

pub fn read_all_posts(conn: &Connection) -> Result<Vec<PostWithAuthor>, RusqliteError> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.user_id, p.content, p.image, COALESCE(u.username, 'deleted user')
         FROM posts p LEFT JOIN users u ON u.id = p.user_id
         ORDER BY p.id",
    )?;
    let post_iter = stmt.query_map([], |row| {
        Ok(PostWithAuthor {
            id: row.get(0)?,
            user_id: row.get(1)?,
            content: row.get(2)?,
            image: row.get(3)?,
            author: row.get(4)?,
        })
    })?;

    let posts = post_iter.filter_map(|p| p.ok()).collect();
    Ok(posts)
}

pub fn count_posts_for_user(conn: &Connection, user_id: i32) -> Result<i64, RusqliteError> {
    conn.query_row(
        "SELECT COUNT(*) FROM posts WHERE user_id = ?1",
        [user_id],
        |row| row.get(0),
    )
}

pub fn delete_post(conn: &Connection, post_id: i32) -> Result<usize, RusqliteError> {
    conn.execute("DELETE FROM posts WHERE id = ?1", [post_id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::db_operations::users_db_operations;
    use crate::setup::db_setup;

    fn test_conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        db_setup::setup_database(&mut conn).unwrap();
        conn
    }

    #[test]
    fn created_post_carries_author_and_image() {
        let conn = test_conn();
        users_db_operations::create_user(&conn, "bob", "pw", false).unwrap();
        let user = users_db_operations::read_user_by_username(&conn, "bob").unwrap();

        create_post(&conn, user.id, "Uploaded an image", Some("cat.png")).unwrap();

        let posts = read_all_posts(&conn).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "bob");
        assert_eq!(posts[0].content, "Uploaded an image");
        assert_eq!(posts[0].image.as_deref(), Some("cat.png"));
    }

    #[test]
    fn delete_removes_exactly_one_post() {
        let conn = test_conn();
        users_db_operations::create_user(&conn, "bob", "pw", false).unwrap();
        let user = users_db_operations::read_user_by_username(&conn, "bob").unwrap();
        let first = create_post(&conn, user.id, "first", None).unwrap();
        create_post(&conn, user.id, "second", None).unwrap();

        assert_eq!(delete_post(&conn, first).unwrap(), 1);
        let posts = read_all_posts(&conn).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "second");
    }

    #[test]
    fn deleting_a_user_cascades_to_their_posts() {
        let conn = test_conn();
        users_db_operations::create_user(&conn, "bob", "pw", false).unwrap();
        users_db_operations::create_user(&conn, "eve", "pw", false).unwrap();
        let bob = users_db_operations::read_user_by_username(&conn, "bob").unwrap();
        let eve = users_db_operations::read_user_by_username(&conn, "eve").unwrap();
        create_post(&conn, bob.id, "bob's post", None).unwrap();
        create_post(&conn, eve.id, "eve's post", None).unwrap();

        users_db_operations::delete_user(&conn, bob.id).unwrap();

        assert_eq!(count_posts_for_user(&conn, bob.id).unwrap(), 0);
        let remaining = read_all_posts(&conn).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].author, "eve");
    }
}
