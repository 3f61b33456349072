//! Slow Gram interactive front end
//!
//! Menu-driven console client for the follow graph. All index parsing,
//! input validation, and the privacy rule (hide gender/biography for
//! private profiles) live here; the core stays free of I/O.

use anyhow::Result;
use slowgram::{Privacy, SocialGraph, VertexId};
use std::io::{self, BufRead, Write};

type Input = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut gram = SocialGraph::new();
    seed_sample_profiles(&mut gram)?;

    let mut input = io::stdin().lock().lines();

    loop {
        print_menu();
        let Some(choice) = read_line(&mut input, "Enter your choice (1 - 8): ")? else {
            break;
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => view_all_profiles(&gram),
            Ok(2) => view_profile_details(&gram, &mut input)?,
            Ok(3) => view_followers(&gram, &mut input)?,
            Ok(4) => view_following(&gram, &mut input)?,
            Ok(5) => add_profile(&mut gram, &mut input)?,
            Ok(6) => follow_user(&mut gram, &mut input)?,
            Ok(7) => unfollow_user(&mut gram, &mut input)?,
            Ok(8) => {
                println!("Thank you for using Slow Gram. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please select a number between 1 and 8."),
        }

        if read_line(&mut input, "\nPress Enter to continue...")?.is_none() {
            break;
        }
    }

    Ok(())
}

/// Sample dataset created on startup
fn seed_sample_profiles(gram: &mut SocialGraph) -> Result<()> {
    let karen = gram.create_profile("Karen", "Female", "Just an ordinary woman", Privacy::Private);
    let susy = gram.create_profile("Susy", "Female", "Just a normal person", Privacy::Public);
    let brian = gram.create_profile("Brian", "Male", "Just an ordinary teenager", Privacy::Public);
    let calvin = gram.create_profile("Calvin", "Male", "Just an ordinary man", Privacy::Private);
    let elon = gram.create_profile("Elon", "Male", "Just a hardworking man", Privacy::Public);

    gram.follow(karen, susy)?;
    gram.follow(karen, brian)?;
    gram.follow(karen, elon)?;
    gram.follow(elon, karen)?;
    gram.follow(elon, calvin)?;
    gram.follow(brian, karen)?;
    gram.follow(brian, susy)?;

    Ok(())
}

fn print_menu() {
    let border = "*".repeat(45);
    println!("{border}");
    println!("Welcome to Slow Gram, Your Social Media App:");
    println!("{border}");
    println!("1. View names of all profiles");
    println!("2. View details for any profile");
    println!("3. View followers of any profile");
    println!("4. View followed accounts of any profile");
    println!("5. Add a new profile");
    println!("6. Follow a user");
    println!("7. Unfollow a user");
    println!("8. Quit");
    println!("{border}");
}

fn print_header(title: &str) {
    let border = "=".repeat(40);
    println!("{border}");
    println!("{title}");
    println!("{border}");
}

/// Prompt and read one line; `None` means the input stream ended
fn read_line(input: &mut Input, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn display_profiles(gram: &SocialGraph, profiles: &[VertexId]) {
    for (index, &id) in profiles.iter().enumerate() {
        if let Ok(profile) = gram.profile(id) {
            println!("{}. {}", index + 1, profile.name());
        }
    }
}

fn profile_name(gram: &SocialGraph, id: VertexId) -> String {
    gram.profile(id)
        .map(|profile| profile.name().to_string())
        .unwrap_or_else(|_| id.to_string())
}

/// List all profiles and read a 1-based selection
fn select_profile(gram: &SocialGraph, input: &mut Input, prompt: &str) -> Result<Option<VertexId>> {
    let profiles = gram.profiles();
    display_profiles(gram, &profiles);

    let Some(line) = read_line(input, &format!("{prompt} (1 - {}): ", profiles.len()))? else {
        return Ok(None);
    };
    match line.trim().parse::<usize>() {
        Ok(choice) if (1..=profiles.len()).contains(&choice) => Ok(Some(profiles[choice - 1])),
        Ok(_) => {
            println!("Invalid profile selection.");
            Ok(None)
        }
        Err(_) => {
            println!("Please enter a valid number.");
            Ok(None)
        }
    }
}

fn view_all_profiles(gram: &SocialGraph) {
    print_header("View All Profile Names:");
    display_profiles(gram, &gram.profiles());
}

fn view_profile_details(gram: &SocialGraph, input: &mut Input) -> Result<()> {
    print_header("View Details For Any Profile:");
    let Some(id) = select_profile(gram, input, "Select whose profile to view")? else {
        return Ok(());
    };

    let profile = gram.profile(id)?;
    println!("Name: {}", profile.name());
    if profile.privacy().is_private() {
        println!("{} has a private profile.", profile.name());
    } else {
        println!("Gender: {}", profile.gender());
        println!("Biography: {}", profile.biography());
    }
    Ok(())
}

fn view_followers(gram: &SocialGraph, input: &mut Input) -> Result<()> {
    print_header("View Followers For Any Profile");
    let Some(id) = select_profile(gram, input, "Select whose profile to view followers")? else {
        return Ok(());
    };

    println!("Follower List:");
    for follower in gram.followers(id) {
        println!("- {}", profile_name(gram, follower));
    }
    Ok(())
}

fn view_following(gram: &SocialGraph, input: &mut Input) -> Result<()> {
    print_header("View Followed Accounts for Any Profile:");
    let Some(id) = select_profile(gram, input, "Select whose profile to view followings")? else {
        return Ok(());
    };

    println!("Following List:");
    for followee in gram.following(id)? {
        println!("- {}", profile_name(gram, followee));
    }
    Ok(())
}

fn add_profile(gram: &mut SocialGraph, input: &mut Input) -> Result<()> {
    print_header("Add a New Profile:");
    let Some(name) = read_line(input, "Enter name: ")? else {
        return Ok(());
    };
    let Some(gender) = read_line(input, "Enter gender: ")? else {
        return Ok(());
    };
    let Some(biography) = read_line(input, "Enter biography: ")? else {
        return Ok(());
    };
    let Some(privacy_raw) =
        read_line(input, "Enter privacy setting (P for private, U for public): ")?
    else {
        return Ok(());
    };

    // Invalid privacy input defaults to public
    let privacy = privacy_raw.parse().unwrap_or(Privacy::Public);
    gram.create_profile(name.clone(), gender, biography, privacy);
    println!("Profile for {name} created successfully!");
    Ok(())
}

fn follow_user(gram: &mut SocialGraph, input: &mut Input) -> Result<()> {
    print_header("Follow a User:");
    println!("Select a user who will follow:");
    let Some(follower) = select_profile(gram, input, "Select follower")? else {
        return Ok(());
    };
    println!("Select a user to be followed:");
    let Some(followee) = select_profile(gram, input, "Select followee")? else {
        return Ok(());
    };

    if follower == followee {
        println!("Invalid selection or tried to follow yourself.");
        return Ok(());
    }

    match gram.follow(follower, followee) {
        Ok(()) => println!(
            "{} is now following {}",
            profile_name(gram, follower),
            profile_name(gram, followee)
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn unfollow_user(gram: &mut SocialGraph, input: &mut Input) -> Result<()> {
    print_header("Unfollow a User:");
    println!("Select a user who will unfollow:");
    let Some(follower) = select_profile(gram, input, "Select follower")? else {
        return Ok(());
    };

    let following = gram.following(follower)?;
    if following.is_empty() {
        println!("{} is not following anyone.", profile_name(gram, follower));
        return Ok(());
    }

    println!(
        "Select which user {} should unfollow:",
        profile_name(gram, follower)
    );
    for (index, &id) in following.iter().enumerate() {
        println!("{}.) {}", index + 1, profile_name(gram, id));
    }

    let Some(line) = read_line(input, &format!("Select (1 - {}): ", following.len()))? else {
        return Ok(());
    };
    match line.trim().parse::<usize>() {
        Ok(choice) if (1..=following.len()).contains(&choice) => {
            let followee = following[choice - 1];
            match gram.unfollow(follower, followee) {
                Ok(()) => println!(
                    "{} has unfollowed {}",
                    profile_name(gram, follower),
                    profile_name(gram, followee)
                ),
                Err(err) => println!("{err}"),
            }
        }
        Ok(_) => println!("Invalid selection."),
        Err(_) => println!("Please enter valid numbers."),
    }
    Ok(())
}
